use crate::ports::outbound::{
    DependencyGraphSource, DependencyRecord, ManifestNode, PageInfo, PageRequest,
};
use crate::sbom_generation::domain::{DependencySet, RepositoryRef};
use crate::sbom_generation::services::DependencyNormalizer;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// FetchDependenciesUseCase - walks the dependency graph of one repository
///
/// The graph is paged on two axes: manifests, and the dependencies of each
/// manifest. Both are traversed to exhaustion with explicit cursors:
///
/// 1. fetch a manifest page (manifest cursor, no dependency cursor)
/// 2. for each manifest, fold its first dependency page into the set
/// 3. while that manifest has more dependencies, re-query with the same
///    manifest cursor and the manifest's dependency cursor, then pick the
///    manifest back out of the response
/// 4. advance the manifest cursor and repeat until the last manifest page
///
/// Any failed request aborts the whole walk; pages already folded are dropped.
pub struct FetchDependenciesUseCase<'a, S> {
    source: &'a S,
}

impl<'a, S> FetchDependenciesUseCase<'a, S>
where
    S: DependencyGraphSource,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn execute(&self, repository: &RepositoryRef) -> Result<DependencySet> {
        let base = PageRequest::first_page(repository);
        let mut dependencies = DependencySet::new();
        let mut manifest_cursor: Option<String> = None;
        let mut manifest_pages = 0usize;

        loop {
            let page = self
                .source
                .fetch_manifest_page(&base.with_cursors(manifest_cursor.clone(), None))?;
            manifest_pages += 1;

            for (index, manifest) in page.nodes.iter().enumerate() {
                self.collect_manifest(
                    &base,
                    manifest_cursor.as_deref(),
                    index,
                    manifest,
                    &mut dependencies,
                )?;
            }

            if !page.page_info.has_next_page {
                break;
            }
            manifest_cursor = Some(next_cursor(
                &base,
                &page.page_info,
                manifest_cursor.as_deref(),
                "manifest",
            )?);
        }

        tracing::debug!(
            repository = %repository,
            manifest_pages,
            dependencies = dependencies.len(),
            "dependency graph traversal complete"
        );
        Ok(dependencies)
    }

    /// Folds every dependency page of one manifest into the set
    fn collect_manifest(
        &self,
        base: &PageRequest,
        manifest_cursor: Option<&str>,
        index: usize,
        manifest: &ManifestNode,
        dependencies: &mut DependencySet,
    ) -> Result<()> {
        fold_records(&manifest.dependencies.nodes, dependencies);

        let mut page_info = manifest.dependencies.page_info.clone();
        let mut dependency_cursor: Option<String> = None;

        while page_info.has_next_page {
            let cursor = next_cursor(
                base,
                &page_info,
                dependency_cursor.as_deref(),
                "dependency",
            )?;
            tracing::debug!(
                manifest = %manifest.filename,
                cursor = %cursor,
                "fetching next dependency page"
            );

            let page = self.source.fetch_manifest_page(
                &base.with_cursors(manifest_cursor.map(String::from), Some(cursor.clone())),
            )?;

            let continued = page
                .nodes
                .get(index)
                .filter(|node| node.filename == manifest.filename)
                .or_else(|| page.nodes.iter().find(|node| node.filename == manifest.filename))
                .ok_or_else(|| {
                    graph_error(
                        base,
                        format!(
                            "manifest '{}' is missing from a continuation page",
                            manifest.filename
                        ),
                    )
                })?;

            fold_records(&continued.dependencies.nodes, dependencies);
            page_info = continued.dependencies.page_info.clone();
            dependency_cursor = Some(cursor);
        }

        Ok(())
    }
}

fn fold_records(records: &[DependencyRecord], dependencies: &mut DependencySet) {
    for record in records {
        let package = DependencyNormalizer::normalize(
            record.package_manager.as_deref().unwrap_or_default(),
            &record.package_name,
            &record.requirements,
        );
        dependencies.insert(package);
    }
}

/// Cursor for the next page; a missing or repeated cursor would loop forever
fn next_cursor(
    base: &PageRequest,
    page_info: &PageInfo,
    previous: Option<&str>,
    axis: &str,
) -> Result<String> {
    match page_info.end_cursor.as_deref() {
        None => Err(graph_error(
            base,
            format!("{} page reports more results but no end cursor", axis),
        )),
        Some(cursor) if Some(cursor) == previous => Err(graph_error(
            base,
            format!("{} cursor did not advance ({})", axis, cursor),
        )),
        Some(cursor) => Ok(cursor.to_string()),
    }
}

fn graph_error(base: &PageRequest, details: String) -> anyhow::Error {
    SbomError::GraphQuery {
        repository: format!("{}/{}", base.owner, base.name),
        details,
    }
    .into()
}
