use crate::application::read_models::{ComponentView, SbomMetadataView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

/// License of the generated document itself
const DOCUMENT_LICENSE: &str = "CC0-1.0";
const TOOL_VENDOR: &str = "advanced-security";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    licenses: Vec<LicenseExpression>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: &'static str,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseExpression>,
}

#[derive(Debug, Serialize)]
struct LicenseExpression {
    expression: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// A flat component list; the repository itself and relationships are
/// not represented.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.4",
            version: 1,
            metadata: self.build_metadata(&model.metadata),
            components: self.build_components(&model.components),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &SbomMetadataView) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: vec![Tool {
                vendor: TOOL_VENDOR,
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
            licenses: vec![LicenseExpression {
                expression: DOCUMENT_LICENSE.to_string(),
            }],
        }
    }

    fn build_components(&self, components: &[ComponentView]) -> Vec<Component> {
        components
            .iter()
            .map(|c| Component {
                component_type: "library",
                group: c.group.clone(),
                name: c.component_name.clone(),
                version: c.version.clone(),
                purl: c.purl.clone(),
                licenses: c
                    .license
                    .expression
                    .iter()
                    .map(|expression| LicenseExpression {
                        expression: expression.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
