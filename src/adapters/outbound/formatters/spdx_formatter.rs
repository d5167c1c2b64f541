use crate::application::read_models::{
    ComponentView, MainPackageView, SbomMetadataView, SbomReadModel,
};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::policies::NOASSERTION;
use crate::shared::Result;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.3";
const DATA_LICENSE: &str = "CC0-1.0";
const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
    document_describes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    creators: Vec<String>,
    created: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    download_location: String,
    files_analyzed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
    license_concluded: String,
    license_declared: String,
    supplier: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: &'static str,
    reference_type: &'static str,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: &'static str,
    related_spdx_element: String,
}

impl ExternalRef {
    fn purl(locator: String) -> Self {
        Self {
            reference_category: "PACKAGE-MANAGER",
            reference_type: "purl",
            reference_locator: locator,
        }
    }
}

/// SpdxFormatter adapter for generating SPDX 2.3 JSON
///
/// Dependencies are listed first, the repository's own package last.
/// Every relationship starts at the main package: one DESCRIBED_BY
/// pointing at the document, then one DEPENDS_ON per dependency.
pub struct SpdxFormatter;

impl SpdxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let mut packages: Vec<Package> = model
            .components
            .iter()
            .map(|c| self.build_package(c))
            .collect();
        packages.push(self.build_main_package(&model.main_package));

        let document = Document {
            spdx_version: SPDX_VERSION,
            data_license: DATA_LICENSE,
            spdx_id: DOCUMENT_ID,
            name: model.metadata.document_name.clone(),
            document_namespace: model.metadata.document_namespace.clone(),
            creation_info: self.build_creation_info(&model.metadata),
            packages,
            relationships: self.build_relationships(model),
            document_describes: vec![model.main_package.element_id.clone()],
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl SpdxFormatter {
    fn build_creation_info(&self, metadata: &SbomMetadataView) -> CreationInfo {
        CreationInfo {
            creators: vec![format!(
                "Tool: {}-{}",
                metadata.tool_name, metadata.tool_version
            )],
            created: metadata.timestamp.clone(),
        }
    }

    fn build_package(&self, component: &ComponentView) -> Package {
        Package {
            name: component.name.clone(),
            spdx_id: component.element_id.clone(),
            version_info: Some(component.version.clone()).filter(|v| !v.is_empty()),
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            external_refs: component
                .purl
                .iter()
                .cloned()
                .map(ExternalRef::purl)
                .collect(),
            license_concluded: component.license.concluded.clone(),
            license_declared: component.license.declared.clone(),
            supplier: NOASSERTION,
        }
    }

    fn build_main_package(&self, main: &MainPackageView) -> Package {
        Package {
            name: main.name.clone(),
            spdx_id: main.element_id.clone(),
            version_info: None,
            download_location: main.download_location.clone(),
            files_analyzed: false,
            external_refs: vec![ExternalRef::purl(main.purl.clone())],
            license_concluded: NOASSERTION.to_string(),
            license_declared: main.license_declared.clone(),
            supplier: NOASSERTION,
        }
    }

    fn build_relationships(&self, model: &SbomReadModel) -> Vec<Relationship> {
        let main_id = &model.main_package.element_id;
        let described_by = Relationship {
            spdx_element_id: main_id.clone(),
            relationship_type: "DESCRIBED_BY",
            related_spdx_element: DOCUMENT_ID.to_string(),
        };

        std::iter::once(described_by)
            .chain(model.components.iter().map(|c| Relationship {
                spdx_element_id: main_id.clone(),
                relationship_type: "DEPENDS_ON",
                related_spdx_element: c.element_id.clone(),
            }))
            .collect()
    }
}
