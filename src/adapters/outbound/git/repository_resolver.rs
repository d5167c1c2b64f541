use crate::sbom_generation::domain::RepositoryRef;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::Command;

/// RepositoryResolver adapter for choosing the repository to query
///
/// An explicit `OWNER/REPO` (or host-qualified form, or remote URL) wins;
/// otherwise the `origin` remote of the git checkout in `working_dir` is used.
pub struct RepositoryResolver {
    working_dir: PathBuf,
}

impl RepositoryResolver {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn resolve(&self, explicit: Option<&str>) -> Result<RepositoryRef> {
        if let Some(input) = explicit.filter(|s| !s.trim().is_empty()) {
            tracing::debug!(repository = input, "using explicit repository");
            return RepositoryRef::parse(input);
        }

        let remote = self.origin_url()?;
        tracing::debug!(remote = %remote, "using origin remote");
        RepositoryRef::parse(&remote)
    }

    fn origin_url(&self) -> Result<String> {
        let resolution_error = |reason: String| SbomError::RepositoryResolution {
            input: self.working_dir.display().to_string(),
            reason,
        };

        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| resolution_error(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(resolution_error(format!(
                "no 'origin' remote found ({})",
                stderr.trim()
            ))
            .into());
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if url.is_empty() {
            return Err(resolution_error("the 'origin' remote has no URL".to_string()).into());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_repository_wins() {
        let resolver = RepositoryResolver::new(PathBuf::from("/nonexistent"));
        let repository = resolver.resolve(Some("octo/demo")).unwrap();
        assert_eq!(repository, RepositoryRef::new("github.com", "octo", "demo"));
    }

    #[test]
    fn test_explicit_host_qualified_repository() {
        let resolver = RepositoryResolver::new(PathBuf::from("."));
        let repository = resolver
            .resolve(Some("ghe.example.com/team/service"))
            .unwrap();
        assert_eq!(repository.host(), "ghe.example.com");
        assert_eq!(repository.owner(), "team");
        assert_eq!(repository.name(), "service");
    }

    #[test]
    fn test_invalid_explicit_repository() {
        let resolver = RepositoryResolver::new(PathBuf::from("."));
        let err = resolver.resolve(Some("just-a-name")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::RepositoryResolution { .. })
        ));
    }

    #[test]
    fn test_directory_without_git_remote_fails() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = RepositoryResolver::new(temp_dir.path().to_path_buf());

        let err = resolver.resolve(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::RepositoryResolution { .. })
        ));
    }

    #[test]
    fn test_blank_explicit_falls_back_to_git() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = RepositoryResolver::new(temp_dir.path().to_path_buf());
        assert!(resolver.resolve(Some("  ")).is_err());
    }
}
