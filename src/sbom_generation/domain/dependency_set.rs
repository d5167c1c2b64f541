use super::Package;
use std::collections::{BTreeMap, BTreeSet};

/// DependencySet aggregate: package manager -> package name -> versions.
///
/// Built incrementally while the dependency graph is paginated. Set
/// semantics collapse repeated triples, and the sorted maps give every
/// traversal the same order across runs.
///
/// A manager or name bucket only exists once a version has been inserted
/// into it, so no level of the map is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    managers: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, package: Package) -> bool {
        self.managers
            .entry(package.manager().to_string())
            .or_default()
            .entry(package.name().to_string())
            .or_default()
            .insert(package.version().to_string())
    }

    pub fn contains(&self, manager: &str, name: &str, version: &str) -> bool {
        self.managers
            .get(manager)
            .and_then(|names| names.get(name))
            .is_some_and(|versions| versions.contains(version))
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    /// Number of distinct (manager, name, version) triples
    pub fn len(&self) -> usize {
        self.managers
            .values()
            .flat_map(|names| names.values())
            .map(|versions| versions.len())
            .sum()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }

    /// Iterates all triples ordered by manager, then name, then version
    pub fn iter(&self) -> impl Iterator<Item = Package> + '_ {
        self.managers.iter().flat_map(|(manager, names)| {
            names.iter().flat_map(move |(name, versions)| {
                versions.iter().map(move |version| {
                    Package::new(manager.as_str(), name.as_str(), version.as_str())
                })
            })
        })
    }

    /// Versions recorded for a single package, if any
    pub fn versions(&self, manager: &str, name: &str) -> Option<&BTreeSet<String>> {
        self.managers.get(manager).and_then(|names| names.get(name))
    }
}

impl FromIterator<Package> for DependencySet {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Package> for DependencySet {
    fn extend<T: IntoIterator<Item = Package>>(&mut self, iter: T) {
        for package in iter {
            self.insert(package);
        }
    }
}
