use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fmt;

pub const DEFAULT_HOST: &str = "github.com";

/// RepositoryRef value object identifying the queried repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    host: String,
    owner: String,
    name: String,
}

impl RepositoryRef {
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `OWNER/REPO`, `HOST/OWNER/REPO`, or a git remote URL
    /// (`https://host/owner/repo.git`, `ssh://git@host/owner/repo.git`,
    /// `git@host:owner/repo.git`).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let path = if let Some((_, rest)) = trimmed.split_once("://") {
            // Drop any `user@` in front of the host
            let without_user = match rest.split_once('@') {
                Some((user, after)) if !user.contains('/') => after,
                _ => rest,
            };
            without_user.to_string()
        } else if let Some((user_host, repo_path)) = trimmed.split_once(':') {
            let host = user_host.rsplit('@').next().unwrap_or(user_host);
            format!("{}/{}", host, repo_path)
        } else {
            trimmed.to_string()
        };

        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let parts: Vec<&str> = path.split('/').collect();

        let reference = match parts.as_slice() {
            [owner, name] => Self::new(DEFAULT_HOST, *owner, *name),
            [host, owner, name] => {
                // Drop an explicit port from the host
                let host = host.split(':').next().unwrap_or(host);
                Self::new(host.to_lowercase(), *owner, *name)
            }
            _ => {
                return Err(SbomError::RepositoryResolution {
                    input: input.to_string(),
                    reason: "expected OWNER/REPO or HOST/OWNER/REPO".to_string(),
                }
                .into())
            }
        };

        if reference.host.is_empty() || reference.owner.is_empty() || reference.name.is_empty() {
            return Err(SbomError::RepositoryResolution {
                input: input.to_string(),
                reason: "host, owner and repository name must not be empty".to_string(),
            }
            .into());
        }

        Ok(reference)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `host/owner/name`, used as the SPDX document name
    pub fn full_name(&self) -> String {
        format!("{}/{}/{}", self.host, self.owner, self.name)
    }

    /// Git download location of the repository itself
    pub fn download_location(&self) -> String {
        format!("git+https://{}/{}/{}.git", self.host, self.owner, self.name)
    }

    /// `pkg:github/<owner>/<name>`
    pub fn purl(&self) -> String {
        format!(
            "pkg:github/{}/{}",
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.name)
        )
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
