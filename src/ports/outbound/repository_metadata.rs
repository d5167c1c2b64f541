use crate::sbom_generation::domain::RepositoryRef;
use crate::shared::Result;

/// RepositoryMetadataRepository port for facts about the queried repository
pub trait RepositoryMetadataRepository {
    /// Returns the SPDX identifier of the repository's own license,
    /// or `None` when the host has no license on record
    fn fetch_repository_license(&self, repository: &RepositoryRef) -> Result<Option<String>>;
}
