use std::fmt;

/// Package value object: one normalized (manager, name, version) triple
/// taken from the dependency graph.
///
/// All three parts are stored exactly as normalized by
/// `DependencyNormalizer`; any of them may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Package {
    manager: String,
    name: String,
    version: String,
}

impl Package {
    pub fn new(
        manager: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            manager: manager.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}:{}", self.manager, self.name)
        } else {
            write!(f, "{}:{}@{}", self.manager, self.name, self.version)
        }
    }
}
