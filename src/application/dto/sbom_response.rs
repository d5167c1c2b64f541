use crate::ports::outbound::EnrichedPackage;
use crate::sbom_generation::domain::{RepositoryRef, SbomMetadata};

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Holds everything the read model builder needs; formatting happens later.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Dependencies in deterministic order, with resolved licenses
    pub enriched_packages: Vec<EnrichedPackage>,
    pub repository: RepositoryRef,
    /// SPDX id of the repository's own license, when known
    pub repository_license: Option<String>,
    pub metadata: SbomMetadata,
}

impl SbomResponse {
    pub fn new(
        enriched_packages: Vec<EnrichedPackage>,
        repository: RepositoryRef,
        repository_license: Option<String>,
        metadata: SbomMetadata,
    ) -> Self {
        Self {
            enriched_packages,
            repository,
            repository_license,
            metadata,
        }
    }
}
