//! Builder for constructing SbomReadModel from domain objects

use super::component_view::{ComponentView, LicenseView, MainPackageView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::ports::outbound::EnrichedPackage;
use crate::sbom_generation::domain::{LicenseInfo, RepositoryRef, SbomMetadata};
use crate::sbom_generation::policies::{LicensePriority, NOASSERTION};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// SPDX element identifier of the synthetic repository package
pub const MAIN_PACKAGE_ID: &str = "SPDXRef-mainPackage";

const SPDX_NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

/// Builder for constructing SbomReadModel from domain objects
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds the read model, assigning `SPDXRef-<n>` identifiers in input order
    ///
    /// # Errors
    /// Returns `SbomError::EmptyDependencyGraph` when `packages` is empty.
    pub fn build(
        packages: Vec<EnrichedPackage>,
        repository: &RepositoryRef,
        repository_license: Option<&str>,
        metadata: &SbomMetadata,
    ) -> Result<SbomReadModel> {
        if packages.is_empty() {
            return Err(SbomError::EmptyDependencyGraph {
                repository: repository.full_name(),
            }
            .into());
        }

        Ok(SbomReadModel {
            metadata: Self::build_metadata(metadata, repository),
            main_package: Self::build_main_package(repository, repository_license),
            components: Self::build_components(&packages),
        })
    }

    fn build_metadata(metadata: &SbomMetadata, repository: &RepositoryRef) -> SbomMetadataView {
        let document_name = repository.full_name();
        let document_namespace = format!(
            "{}/{}-{}",
            SPDX_NAMESPACE_BASE,
            document_name,
            metadata.document_id()
        );

        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            document_id: metadata.document_id().to_string(),
            document_name,
            document_namespace,
        }
    }

    fn build_main_package(
        repository: &RepositoryRef,
        repository_license: Option<&str>,
    ) -> MainPackageView {
        MainPackageView {
            element_id: MAIN_PACKAGE_ID.to_string(),
            name: format!("{}/{}", repository.owner(), repository.name()),
            download_location: repository.download_location(),
            purl: repository.purl(),
            license_declared: repository_license
                .filter(|license| !license.is_empty())
                .unwrap_or(NOASSERTION)
                .to_string(),
        }
    }

    fn build_components(packages: &[EnrichedPackage]) -> Vec<ComponentView> {
        packages
            .iter()
            .enumerate()
            .map(|(index, enriched)| {
                let descriptor = &enriched.descriptor;
                let group = Some(descriptor.namespace())
                    .filter(|namespace| !namespace.is_empty())
                    .map(String::from);

                ComponentView {
                    element_id: format!("SPDXRef-{}", index),
                    name: enriched.package.name().to_string(),
                    version: enriched.package.version().to_string(),
                    group,
                    component_name: descriptor.name().to_string(),
                    purl: descriptor.purl(),
                    license: Self::build_license(&enriched.license),
                }
            })
            .collect()
    }

    fn build_license(license: &LicenseInfo) -> LicenseView {
        let (declared, concluded) = LicensePriority::spdx_fields(license);
        LicenseView {
            declared,
            concluded,
            expression: LicensePriority::effective_expression(license).map(String::from),
        }
    }
}
