use gh_sbom::prelude::*;
use std::collections::HashMap;

/// Mock LicenseRepository for testing, keyed by purl
pub struct MockLicenseRepository {
    pub definitions: HashMap<String, (Option<String>, Vec<String>)>,
    pub should_fail: bool,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_license(mut self, purl: &str, declared: Option<&str>, discovered: &[&str]) -> Self {
        self.definitions.insert(
            purl.to_string(),
            (
                declared.map(String::from),
                discovered.iter().map(|s| s.to_string()).collect(),
            ),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            definitions: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn fetch_license_definition(
        &self,
        descriptor: &PackageDescriptor,
    ) -> Result<(Option<String>, Vec<String>)> {
        if self.should_fail {
            anyhow::bail!("Mock license repository failure");
        }

        let purl = descriptor.purl().unwrap_or_default();
        Ok(self
            .definitions
            .get(&purl)
            .cloned()
            .unwrap_or((None, vec![])))
    }
}
