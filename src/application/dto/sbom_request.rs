use crate::sbom_generation::domain::RepositoryRef;

/// SbomRequest - Internal request DTO for SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Repository whose dependency graph is queried
    pub repository: RepositoryRef,
    /// Whether to look up licenses for each dependency and the repository
    pub fetch_licenses: bool,
}

impl SbomRequest {
    pub fn new(repository: RepositoryRef, fetch_licenses: bool) -> Self {
        Self {
            repository,
            fetch_licenses,
        }
    }
}
