use crate::sbom_generation::domain::{LicenseInfo, Package, PackageDescriptor};

/// EnrichedPackage represents a dependency ready for document assembly
///
/// Carries the normalized triple, its derived descriptor and whatever
/// license information was resolved (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPackage {
    pub package: Package,
    pub descriptor: PackageDescriptor,
    pub license: LicenseInfo,
}

impl EnrichedPackage {
    pub fn new(package: Package, descriptor: PackageDescriptor, license: LicenseInfo) -> Self {
        Self {
            package,
            descriptor,
            license,
        }
    }
}
