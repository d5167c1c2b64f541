pub mod dependency_set;
pub mod license_info;
pub mod package;
pub mod package_descriptor;
pub mod repository;
pub mod sbom_metadata;

pub use dependency_set::DependencySet;
pub use license_info::LicenseInfo;
pub use package::Package;
pub use package_descriptor::PackageDescriptor;
pub use repository::RepositoryRef;
pub use sbom_metadata::SbomMetadata;
