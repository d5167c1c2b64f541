//! Component view structs for read model
//!
//! These structs provide a flattened, query-optimized view of component data.

/// View representation of one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentView {
    /// Sequential SPDX element identifier (`SPDXRef-<n>`)
    pub element_id: String,
    /// Dependency name as reported by the dependency graph (lowercased)
    pub name: String,
    /// Version, empty when the requirement carried none
    pub version: String,
    /// Purl namespace (npm scope, Go module prefix, Maven group)
    pub group: Option<String>,
    /// Purl name, without the namespace
    pub component_name: String,
    pub purl: Option<String>,
    pub license: LicenseView,
}

/// License fields after precedence has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseView {
    /// SPDX `licenseDeclared`, `NOASSERTION` when unknown
    pub declared: String,
    /// SPDX `licenseConcluded`, `NOASSERTION` when unknown
    pub concluded: String,
    /// The one expression that was resolved, if any
    pub expression: Option<String>,
}

/// The synthetic package standing for the queried repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainPackageView {
    pub element_id: String,
    /// `owner/name`
    pub name: String,
    pub download_location: String,
    pub purl: String,
    pub license_declared: String,
}
