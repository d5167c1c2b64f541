use crate::sbom_generation::domain::Package;

/// Width of the comparator prefix on dependency graph requirement strings
/// (`"= 1.2.3"`, `">= 2.0"`, `"~> 5.1"`)
const COMPARATOR_WIDTH: usize = 2;

/// DependencyNormalizer service turning raw graph records into packages
///
/// Pure function, no I/O. Managers and names are lowercased; the version is
/// taken from the requirements string by dropping the comparator prefix and
/// then a single leading `v`.
pub struct DependencyNormalizer;

impl DependencyNormalizer {
    pub fn normalize(package_manager: &str, package_name: &str, requirements: &str) -> Package {
        Package::new(
            package_manager.to_lowercase(),
            package_name.to_lowercase(),
            Self::version_from_requirements(requirements),
        )
    }

    /// Extracts the version from a requirements string.
    ///
    /// Requirements shorter than the comparator prefix yield an empty version.
    pub fn version_from_requirements(requirements: &str) -> String {
        let version = match requirements.char_indices().nth(COMPARATOR_WIDTH) {
            Some((offset, _)) => &requirements[offset..],
            None => "",
        };
        version.strip_prefix('v').unwrap_or(version).to_string()
    }
}
