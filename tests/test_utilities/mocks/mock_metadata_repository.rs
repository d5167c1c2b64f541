use gh_sbom::prelude::*;

/// Mock RepositoryMetadataRepository returning a fixed license
pub struct MockMetadataRepository {
    pub license: Option<String>,
}

impl MockMetadataRepository {
    pub fn new(license: Option<&str>) -> Self {
        Self {
            license: license.map(String::from),
        }
    }
}

impl RepositoryMetadataRepository for MockMetadataRepository {
    fn fetch_repository_license(&self, _repository: &RepositoryRef) -> Result<Option<String>> {
        Ok(self.license.clone())
    }
}
