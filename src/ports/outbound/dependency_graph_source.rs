use crate::sbom_generation::domain::RepositoryRef;
use crate::shared::Result;

/// Page size for both pagination axes of the dependency graph query
pub const PAGE_SIZE: u32 = 100;

/// Cursor state of one connection in a GraphQL response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl PageInfo {
    pub fn last() -> Self {
        Self::default()
    }

    pub fn next(end_cursor: impl Into<String>) -> Self {
        Self {
            has_next_page: true,
            end_cursor: Some(end_cursor.into()),
        }
    }
}

/// One dependency as reported by the dependency graph, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub package_manager: Option<String>,
    pub package_name: String,
    pub requirements: String,
}

impl DependencyRecord {
    pub fn new(
        package_manager: Option<&str>,
        package_name: impl Into<String>,
        requirements: impl Into<String>,
    ) -> Self {
        Self {
            package_manager: package_manager.map(String::from),
            package_name: package_name.into(),
            requirements: requirements.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyPage {
    pub nodes: Vec<DependencyRecord>,
    pub page_info: PageInfo,
}

/// A manifest (lockfile, workflow, pom...) with one page of its dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestNode {
    pub filename: String,
    pub dependencies: DependencyPage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPage {
    pub nodes: Vec<ManifestNode>,
    pub page_info: PageInfo,
}

/// Variables of a single dependency graph query
///
/// `dependency_cursor` applies to every manifest in the requested manifest
/// page; callers continuing one manifest pick it out of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub owner: String,
    pub name: String,
    pub first: u32,
    pub manifest_cursor: Option<String>,
    pub dependency_cursor: Option<String>,
}

impl PageRequest {
    pub fn first_page(repository: &RepositoryRef) -> Self {
        Self {
            owner: repository.owner().to_string(),
            name: repository.name().to_string(),
            first: PAGE_SIZE,
            manifest_cursor: None,
            dependency_cursor: None,
        }
    }

    pub fn with_cursors(
        &self,
        manifest_cursor: Option<String>,
        dependency_cursor: Option<String>,
    ) -> Self {
        Self {
            manifest_cursor,
            dependency_cursor,
            ..self.clone()
        }
    }
}

/// DependencyGraphSource port for the paginated dependency graph query
///
/// One call is one round-trip. Traversal of both pagination axes belongs
/// to the caller.
pub trait DependencyGraphSource {
    /// Fetches one page of manifests, each with one page of dependencies
    ///
    /// # Errors
    /// Returns an error on transport or authentication failure, when the
    /// response carries GraphQL errors, or when the repository is missing.
    fn fetch_manifest_page(&self, request: &PageRequest) -> Result<ManifestPage>;
}
