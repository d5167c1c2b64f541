use gh_sbom::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DependencyGraphSource serving fixed manifest pages
///
/// Page `n` is answered for manifest cursor `page-n` (no cursor for page 0).
#[derive(Clone, Default)]
pub struct MockGraphSource {
    pages: Vec<ManifestPage>,
    pub requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl MockGraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single page holding one manifest
    pub fn with_manifest(filename: &str, records: Vec<DependencyRecord>) -> Self {
        Self::new().with_page(vec![(filename, records)])
    }

    /// Appends a page of manifests; earlier pages are linked to it
    pub fn with_page(mut self, manifests: Vec<(&str, Vec<DependencyRecord>)>) -> Self {
        let next_cursor = format!("page-{}", self.pages.len());
        if let Some(previous) = self.pages.last_mut() {
            previous.page_info = PageInfo::next(next_cursor);
        }

        self.pages.push(ManifestPage {
            nodes: manifests
                .into_iter()
                .map(|(filename, records)| ManifestNode {
                    filename: filename.to_string(),
                    dependencies: DependencyPage {
                        nodes: records,
                        page_info: PageInfo::last(),
                    },
                })
                .collect(),
            page_info: PageInfo::last(),
        });
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl DependencyGraphSource for MockGraphSource {
    fn fetch_manifest_page(&self, request: &PageRequest) -> Result<ManifestPage> {
        self.requests.lock().unwrap().push(request.clone());

        let index = match request.manifest_cursor.as_deref() {
            None => 0,
            Some(cursor) => cursor
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| anyhow::anyhow!("unexpected cursor {}", cursor))?,
        };

        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

/// Shorthand for a graph record
pub fn record(manager: &str, name: &str, requirements: &str) -> DependencyRecord {
    DependencyRecord::new(Some(manager), name, requirements)
}
