use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Timestamp layout shared by SPDX `created` and CycloneDX `timestamp`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const TOOL_NAME: &str = "gh-sbom";

/// SbomGenerator service for generating SBOM metadata
///
/// Every call produces a new timestamp and a fresh random document
/// identifier; the identifier is not derived from document content.
pub struct SbomGenerator;

impl SbomGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let document_id = Uuid::new_v4().to_string();

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            document_id,
        )
    }

    /// Generates SBOM metadata with this tool's name and compile-time version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
