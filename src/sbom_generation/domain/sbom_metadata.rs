/// Document-level metadata shared by both output formats
///
/// Generated once per run; the document id feeds the SPDX namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    document_id: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        document_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            document_id,
        }
    }

    /// Creation time, `YYYY-MM-DDThh:mm:ssZ`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Freshly generated identifier, unique per generation
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_accessors() {
        let metadata = SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "gh-sbom".to_string(),
            "0.3.0".to_string(),
            "0b7e1c8e-6c1c-4d7c-9a55-0c6f7f6a9a11".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "gh-sbom");
        assert_eq!(metadata.tool_version(), "0.3.0");
        assert_eq!(metadata.document_id(), "0b7e1c8e-6c1c-4d7c-9a55-0c6f7f6a9a11");
    }
}
