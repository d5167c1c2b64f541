use crate::ports::outbound::license_repository::LicenseDefinition;
use crate::ports::outbound::LicenseRepository;
use crate::sbom_generation::domain::PackageDescriptor;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};

pub const DEFAULT_CLEARLYDEFINED_URL: &str = "https://api.clearlydefined.io";

// Sparse definitions send `null` as often as they omit a key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
struct Definition {
    #[serde(default, deserialize_with = "null_as_default")]
    licensed: Licensed,
}

#[derive(Debug, Default, Deserialize)]
struct Licensed {
    #[serde(default)]
    declared: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    facets: Facets,
}

#[derive(Debug, Default, Deserialize)]
struct Facets {
    #[serde(default, deserialize_with = "null_as_default")]
    core: CoreFacet,
}

#[derive(Debug, Default, Deserialize)]
struct CoreFacet {
    #[serde(default, deserialize_with = "null_as_default")]
    discovered: Discovered,
}

#[derive(Debug, Default, Deserialize)]
struct Discovered {
    #[serde(default, deserialize_with = "null_as_default")]
    expressions: Vec<String>,
}

/// ClearlyDefinedClient adapter for the ClearlyDefined definitions API
///
/// One blocking GET per package version; no retries and no caching.
pub struct ClearlyDefinedClient {
    client: Client,
    base_url: String,
}

impl ClearlyDefinedClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gh-sbom/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds `{base}/definitions/{type}/{provider}/{namespace}/{name}/{revision}`
    fn definition_url(&self, descriptor: &PackageDescriptor) -> Result<String> {
        if descriptor.license_type().is_empty() {
            anyhow::bail!("no license database ecosystem for this package manager");
        }
        if descriptor.version().is_empty() {
            anyhow::bail!("package has no version to look up");
        }

        let version = descriptor.license_version();
        let segments: [&str; 5] = [
            descriptor.license_type(),
            descriptor.license_provider(),
            descriptor.license_namespace(),
            descriptor.name(),
            version.as_ref(),
        ];
        let path: Vec<String> = segments
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();

        Ok(format!("{}/definitions/{}", self.base_url, path.join("/")))
    }
}

impl LicenseRepository for ClearlyDefinedClient {
    fn fetch_license_definition(
        &self,
        descriptor: &PackageDescriptor,
    ) -> Result<LicenseDefinition> {
        let url = self.definition_url(descriptor)?;
        tracing::debug!(%url, "fetching license definition");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!("ClearlyDefined API returned status code {}", response.status());
        }

        let definition: Definition = response.json()?;
        Ok((
            definition.licensed.declared,
            definition.licensed.facets.core.discovered.expressions,
        ))
    }
}
