use crate::sbom_generation::domain::LicenseInfo;

/// License value SPDX uses when nothing is asserted
pub const NOASSERTION: &str = "NOASSERTION";

/// LicensePriority policy for choosing between license sources
///
/// Precedence, not a merge:
/// 1. the declared license expression, if non-empty
/// 2. otherwise the first discovered expression, if non-empty
/// 3. otherwise nothing
pub struct LicensePriority;

impl LicensePriority {
    /// Builds a LicenseInfo holding at most one of declared/discovered
    pub fn create_license_info(
        declared: Option<String>,
        discovered: Vec<String>,
    ) -> LicenseInfo {
        if let Some(declared) = declared.filter(|d| !d.trim().is_empty()) {
            return LicenseInfo::new(Some(declared), None);
        }

        let discovered = discovered.into_iter().next().filter(|d| !d.trim().is_empty());
        LicenseInfo::new(None, discovered)
    }

    /// Maps a LicenseInfo onto SPDX (declared, concluded) package fields
    ///
    /// A declared license fills `licenseDeclared`; a discovered one fills
    /// `licenseConcluded`. Anything unset stays `NOASSERTION`.
    pub fn spdx_fields(license: &LicenseInfo) -> (String, String) {
        match (license.declared(), license.discovered()) {
            (Some(declared), _) => (declared.to_string(), NOASSERTION.to_string()),
            (None, Some(discovered)) => (NOASSERTION.to_string(), discovered.to_string()),
            (None, None) => (NOASSERTION.to_string(), NOASSERTION.to_string()),
        }
    }

    /// The single license expression worth reporting, if any
    pub fn effective_expression(license: &LicenseInfo) -> Option<&str> {
        license.declared().or(license.discovered())
    }
}
