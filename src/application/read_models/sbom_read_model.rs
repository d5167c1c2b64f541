//! SBOM read model for query operations

use super::component_view::{ComponentView, MainPackageView};

/// Main read model for SBOM data
///
/// Dependencies appear in `components` in a deterministic order; the
/// repository itself is kept apart in `main_package`.
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    pub main_package: MainPackageView,
    pub components: Vec<ComponentView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// UTC creation time, `YYYY-MM-DDThh:mm:ssZ`
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Fresh random identifier of this generation
    pub document_id: String,
    /// `host/owner/name`
    pub document_name: String,
    /// Unique URI for the SPDX document
    pub document_namespace: String,
}
