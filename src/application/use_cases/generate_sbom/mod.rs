use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::use_cases::FetchDependenciesUseCase;
use crate::ports::outbound::{
    DependencyGraphSource, EnrichedPackage, LicenseRepository, ProgressReporter,
    RepositoryMetadataRepository,
};
use crate::sbom_generation::domain::{LicenseInfo, Package, RepositoryRef};
use crate::sbom_generation::services::{PurlBuilder, SbomGenerator};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Orchestrates the pipeline: dependency graph traversal, descriptor
/// derivation, optional license enrichment and metadata generation.
/// Everything runs sequentially on the calling thread.
///
/// # Type Parameters
/// * `GS` - DependencyGraphSource implementation
/// * `LREPO` - LicenseRepository implementation
/// * `MREPO` - RepositoryMetadataRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<GS, LREPO, MREPO, PR> {
    graph_source: GS,
    license_repository: LREPO,
    metadata_repository: MREPO,
    progress_reporter: PR,
}

impl<GS, LREPO, MREPO, PR> GenerateSbomUseCase<GS, LREPO, MREPO, PR>
where
    GS: DependencyGraphSource,
    LREPO: LicenseRepository,
    MREPO: RepositoryMetadataRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        graph_source: GS,
        license_repository: LREPO,
        metadata_repository: MREPO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            graph_source,
            license_repository,
            metadata_repository,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Fails on any dependency graph error and when the graph is empty.
    /// License lookup failures are reported and never fail the run.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Walk the dependency graph
        let packages = self.fetch_and_report_dependencies(&request.repository)?;

        // Step 2: Derive descriptors and, if requested, licenses
        let enriched_packages = if request.fetch_licenses {
            self.enrich_packages_with_licenses(packages)
        } else {
            packages
                .into_iter()
                .map(|package| {
                    let descriptor = PurlBuilder::build(&package);
                    EnrichedPackage::new(package, descriptor, LicenseInfo::empty())
                })
                .collect()
        };

        // Step 3: The repository's own license for the main package
        let repository_license = if request.fetch_licenses {
            self.fetch_repository_license(&request.repository)
        } else {
            None
        };

        let metadata = SbomGenerator::generate_default_metadata();
        Ok(SbomResponse::new(
            enriched_packages,
            request.repository,
            repository_license,
            metadata,
        ))
    }

    fn fetch_and_report_dependencies(&self, repository: &RepositoryRef) -> Result<Vec<Package>> {
        self.progress_reporter.report(&format!(
            "📡 Querying dependency graph for {}...",
            repository
        ));

        let dependencies = FetchDependenciesUseCase::new(&self.graph_source).execute(repository)?;

        if dependencies.is_empty() {
            return Err(SbomError::EmptyDependencyGraph {
                repository: repository.full_name(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} dependenc{} across {} package manager(s)",
            dependencies.len(),
            if dependencies.len() == 1 { "y" } else { "ies" },
            dependencies.manager_count()
        ));

        Ok(dependencies.iter().collect())
    }

    /// Looks up each package's license, one request at a time
    ///
    /// Failures are collected and reported after the loop; the package is
    /// kept with no license information.
    fn enrich_packages_with_licenses(&self, packages: Vec<Package>) -> Vec<EnrichedPackage> {
        self.progress_reporter
            .report("🔍 Fetching license information...");

        let total = packages.len();
        let mut enriched = Vec::with_capacity(total);
        let mut errors: Vec<(String, String)> = Vec::new();

        for (idx, package) in packages.into_iter().enumerate() {
            let descriptor = PurlBuilder::build(&package);
            let license = match self.license_repository.enrich_with_license(&descriptor) {
                Ok(license) => license,
                Err(e) => {
                    tracing::warn!(package = %package, error = %e, "license lookup failed");
                    errors.push((package.to_string(), e.to_string()));
                    LicenseInfo::empty()
                }
            };
            enriched.push(EnrichedPackage::new(package, descriptor, license));

            self.progress_reporter
                .report_progress(idx + 1, total, Some("Fetching license information..."));
        }

        let failed = errors.len();
        for (package_name, error_msg) in errors {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Failed to fetch license information for {}: {}",
                package_name, error_msg
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ License information retrieval complete: {} succeeded out of {}, {} failed",
            total - failed,
            total,
            failed
        ));

        enriched
    }

    /// Any failure degrades to no license for the main package
    fn fetch_repository_license(&self, repository: &RepositoryRef) -> Option<String> {
        match self.metadata_repository.fetch_repository_license(repository) {
            Ok(license) => license,
            Err(e) => {
                tracing::warn!(
                    repository = %repository,
                    error = %e,
                    "repository license lookup failed"
                );
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch the license of {}: {}",
                    repository, e
                ));
                None
            }
        }
    }
}
