//! Package descriptor derived from a dependency triple
//!
//! A descriptor carries the identifiers needed by two consumers: the purl
//! scheme (`purl_type`) and the license database (`license_type` +
//! `license_provider`).

use std::borrow::Cow;

/// Placeholder the license database expects for an absent namespace
pub const LICENSE_NAMESPACE_PLACEHOLDER: &str = "-";

/// Ecosystems whose native version scheme never carries a `v` prefix
const RAW_VERSION_TYPES: [&str; 4] = ["gem", "pypi", "maven", "npm"];

/// PackageDescriptor value object (purl-like package coordinates)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    license_type: String,
    license_provider: String,
    purl_type: String,
    namespace: String,
    name: String,
    version: String,
}

impl PackageDescriptor {
    pub fn new(
        license_type: impl Into<String>,
        license_provider: impl Into<String>,
        purl_type: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            license_type: license_type.into(),
            license_provider: license_provider.into(),
            purl_type: purl_type.into(),
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Ecosystem tag for the license database (`npm`, `go`, `git`, ...)
    pub fn license_type(&self) -> &str {
        &self.license_type
    }

    /// Provider tag for the license database (`npmjs`, `golang`, ...)
    pub fn license_provider(&self) -> &str {
        &self.license_provider
    }

    /// Type component of the package URL (`npm`, `golang`, `github`, ...)
    pub fn purl_type(&self) -> &str {
        &self.purl_type
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the manager was mapped to a known ecosystem
    pub fn is_recognized(&self) -> bool {
        !self.purl_type.is_empty()
    }

    /// Renders the package URL.
    ///
    /// `pkg:<type>/<namespace>/<name>@<version>` where the namespace, name and
    /// version are each percent-encoded as a single segment, so a `/` inside a
    /// namespace becomes `%2F`. The namespace segment is dropped when empty
    /// and the `@<version>` suffix when the version is empty.
    ///
    /// Returns `None` for unrecognized managers, which have no purl type.
    pub fn purl(&self) -> Option<String> {
        if !self.is_recognized() {
            return None;
        }

        let mut purl = format!("pkg:{}/", self.purl_type);
        if !self.namespace.is_empty() {
            purl.push_str(&urlencoding::encode(&self.namespace));
            purl.push('/');
        }
        purl.push_str(&urlencoding::encode(&self.name));
        if !self.version.is_empty() {
            purl.push('@');
            purl.push_str(&urlencoding::encode(&self.version));
        }
        Some(purl)
    }

    /// Namespace as the license database expects it
    pub fn license_namespace(&self) -> &str {
        if self.namespace.is_empty() {
            LICENSE_NAMESPACE_PLACEHOLDER
        } else {
            &self.namespace
        }
    }

    /// Version as the license database expects it.
    ///
    /// gem, pypi, maven and npm are queried with the raw version; every
    /// other ecosystem is queried with a `v` prefix.
    pub fn license_version(&self) -> Cow<'_, str> {
        if RAW_VERSION_TYPES.contains(&self.license_type.as_str()) {
            Cow::Borrowed(&self.version)
        } else {
            Cow::Owned(format!("v{}", self.version))
        }
    }
}
