/// LicenseInfo value object: the outcome of one license lookup
///
/// `declared` is the license stated by the package itself, `discovered` one
/// found by scanning its contents. Both absent means the lookup found
/// nothing or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseInfo {
    declared: Option<String>,
    discovered: Option<String>,
}

impl LicenseInfo {
    pub fn new(declared: Option<String>, discovered: Option<String>) -> Self {
        Self {
            declared,
            discovered,
        }
    }

    /// No license data
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn declared(&self) -> Option<&str> {
        self.declared.as_deref()
    }

    pub fn discovered(&self) -> Option<&str> {
        self.discovered.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_none() && self.discovered.is_none()
    }
}
