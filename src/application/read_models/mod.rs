//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that both document formatters consume. All
//! identifier assignment and license precedence happens while building
//! the read model, so formatters only map fields.

pub mod component_view;
pub mod sbom_read_model;
pub mod sbom_read_model_builder;

pub use component_view::{ComponentView, LicenseView, MainPackageView};
pub use sbom_read_model::{SbomMetadataView, SbomReadModel};
pub use sbom_read_model_builder::{SbomReadModelBuilder, MAIN_PACKAGE_ID};
