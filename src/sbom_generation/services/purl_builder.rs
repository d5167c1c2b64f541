use crate::sbom_generation::domain::{Package, PackageDescriptor};

/// Identifiers for one ecosystem: (license type, license provider, purl type)
type EcosystemTags = (&'static str, &'static str, &'static str);

/// PurlBuilder service mapping dependency triples to package descriptors
///
/// Pure and total: unrecognized managers produce a descriptor with empty
/// ecosystem tags and the name and version echoed unchanged.
pub struct PurlBuilder;

impl PurlBuilder {
    pub fn build(package: &Package) -> PackageDescriptor {
        Self::build_descriptor(package.manager(), package.name(), package.version())
    }

    pub fn build_descriptor(manager: &str, name: &str, version: &str) -> PackageDescriptor {
        let Some((license_type, license_provider, purl_type)) = Self::ecosystem_tags(manager)
        else {
            return PackageDescriptor::new("", "", "", "", name, version);
        };

        let (namespace, purl_name) = match manager {
            "actions" => split_keeping_name(name, name.split_once('/')),
            "go" => split_keeping_name(name, name.rsplit_once('/')),
            "maven" => split_keeping_name(name, name.split_once(':')),
            "npm" if name.starts_with('@') => split_keeping_name(name, name.split_once('/')),
            _ => ("", name),
        };

        PackageDescriptor::new(
            license_type,
            license_provider,
            purl_type,
            namespace,
            purl_name,
            version,
        )
    }

    fn ecosystem_tags(manager: &str) -> Option<EcosystemTags> {
        match manager {
            "actions" => Some(("git", "github", "github")),
            "go" => Some(("go", "golang", "golang")),
            "rubygems" => Some(("gem", "rubygems", "gem")),
            "maven" => Some(("maven", "mavenCentral", "maven")),
            "npm" => Some(("npm", "npmjs", "npm")),
            "pip" => Some(("pypi", "pypi", "pypi")),
            _ => None,
        }
    }
}

/// Applies a namespace split, falling back to the whole name when the split
/// would leave the purl name empty.
fn split_keeping_name<'a>(name: &'a str, split: Option<(&'a str, &'a str)>) -> (&'a str, &'a str) {
    match split {
        Some((namespace, rest)) if !rest.is_empty() => (namespace, rest),
        _ => ("", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purl(manager: &str, name: &str, version: &str) -> Option<String> {
        PurlBuilder::build_descriptor(manager, name, version).purl()
    }

    #[test]
    fn test_npm_unscoped() {
        let descriptor = PurlBuilder::build_descriptor("npm", "lodash", "4.17.21");
        assert_eq!(descriptor.license_type(), "npm");
        assert_eq!(descriptor.license_provider(), "npmjs");
        assert_eq!(descriptor.namespace(), "");
        assert_eq!(descriptor.purl().as_deref(), Some("pkg:npm/lodash@4.17.21"));
    }

    #[test]
    fn test_npm_scoped() {
        let descriptor = PurlBuilder::build_descriptor("npm", "@babel/core", "7.23.0");
        assert_eq!(descriptor.namespace(), "@babel");
        assert_eq!(descriptor.name(), "core");
        assert_eq!(descriptor.purl().as_deref(), Some("pkg:npm/%40babel/core@7.23.0"));
    }

    #[test]
    fn test_go_module_path() {
        let descriptor = PurlBuilder::build_descriptor("go", "github.com/foo/bar", "1.2.3");
        assert_eq!(descriptor.license_type(), "go");
        assert_eq!(descriptor.license_provider(), "golang");
        assert_eq!(descriptor.namespace(), "github.com/foo");
        assert_eq!(descriptor.name(), "bar");
        assert_eq!(descriptor.license_version(), "v1.2.3");
        assert_eq!(
            descriptor.purl().as_deref(),
            Some("pkg:golang/github.com%2Ffoo/bar@1.2.3")
        );
    }

    #[test]
    fn test_go_single_segment_module() {
        let descriptor = PurlBuilder::build_descriptor("go", "rsc.io", "1.0.0");
        assert_eq!(descriptor.namespace(), "");
        assert_eq!(descriptor.name(), "rsc.io");
    }

    #[test]
    fn test_actions() {
        let descriptor = PurlBuilder::build_descriptor("actions", "actions/checkout", "4");
        assert_eq!(descriptor.license_type(), "git");
        assert_eq!(descriptor.license_provider(), "github");
        assert_eq!(descriptor.namespace(), "actions");
        assert_eq!(descriptor.name(), "checkout");
        assert_eq!(descriptor.purl().as_deref(), Some("pkg:github/actions/checkout@4"));
    }

    #[test]
    fn test_actions_with_subdirectory() {
        assert_eq!(
            purl("actions", "github/codeql-action/init", "2").as_deref(),
            Some("pkg:github/github/codeql-action%2Finit@2")
        );
    }

    #[test]
    fn test_maven() {
        let descriptor =
            PurlBuilder::build_descriptor("maven", "org.apache.commons:commons-lang3", "3.14.0");
        assert_eq!(descriptor.license_type(), "maven");
        assert_eq!(descriptor.license_provider(), "mavenCentral");
        assert_eq!(descriptor.namespace(), "org.apache.commons");
        assert_eq!(descriptor.name(), "commons-lang3");
        assert_eq!(
            descriptor.purl().as_deref(),
            Some("pkg:maven/org.apache.commons/commons-lang3@3.14.0")
        );
    }

    #[test]
    fn test_rubygems_and_pip_have_no_namespace() {
        let gem = PurlBuilder::build_descriptor("rubygems", "rails", "7.1.0");
        assert_eq!(gem.license_type(), "gem");
        assert_eq!(gem.license_provider(), "rubygems");
        assert_eq!(gem.purl().as_deref(), Some("pkg:gem/rails@7.1.0"));

        let pip = PurlBuilder::build_descriptor("pip", "requests", "2.31.0");
        assert_eq!(pip.license_type(), "pypi");
        assert_eq!(pip.license_provider(), "pypi");
        assert_eq!(pip.purl().as_deref(), Some("pkg:pypi/requests@2.31.0"));
    }

    #[test]
    fn test_unrecognized_manager_echoes_input() {
        let descriptor = PurlBuilder::build_descriptor("nuget", "Newtonsoft.Json", "13.0.1");
        assert_eq!(descriptor.license_type(), "");
        assert_eq!(descriptor.license_provider(), "");
        assert_eq!(descriptor.purl_type(), "");
        assert_eq!(descriptor.namespace(), "");
        assert_eq!(descriptor.name(), "Newtonsoft.Json");
        assert_eq!(descriptor.version(), "13.0.1");
        assert_eq!(descriptor.purl(), None);
    }

    #[test]
    fn test_name_is_never_empty_for_degenerate_inputs() {
        for (manager, name) in [("maven", "group:"), ("npm", "@scope/"), ("actions", "owner/")] {
            let descriptor = PurlBuilder::build_descriptor(manager, name, "1");
            assert!(!descriptor.name().is_empty(), "{} {}", manager, name);
        }
    }

    #[test]
    fn test_build_from_package() {
        let descriptor = PurlBuilder::build(&Package::new("pip", "flask", "3.0.0"));
        assert_eq!(descriptor.purl().as_deref(), Some("pkg:pypi/flask@3.0.0"));
    }

    #[test]
    fn test_distinct_descriptors_render_distinct_purls() {
        let inputs = [
            ("npm", "@a/b", "1"),
            ("npm", "a%2Fb", "1"),
            ("go", "x/y/z", "1"),
            ("go", "x/y%2Fz", "1"),
            ("maven", "g:a", "1"),
            ("maven", "g:a", "2"),
        ];
        let purls: std::collections::HashSet<String> = inputs
            .iter()
            .filter_map(|(m, n, v)| purl(m, n, v))
            .collect();
        assert_eq!(purls.len(), inputs.len());
    }
}
