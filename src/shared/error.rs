use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The tool only distinguishes success from a fatal failure; clap keeps
/// its own exit status for argument errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The SBOM document was produced
    Success = 0,
    /// Any fatal error (repository resolution, graph query, empty graph, I/O)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Every variant is fatal. Recoverable conditions (license lookups) never
/// surface as an `SbomError`.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Could not determine the target repository from '{input}'\nReason: {reason}\n\n💡 Hint: Pass --repository OWNER/REPO or run inside a git checkout with an 'origin' remote")]
    RepositoryResolution { input: String, reason: String },

    #[error("No GitHub API token found\n\n💡 Hint: Set GH_TOKEN or GITHUB_TOKEN to a token that can read the repository's dependency graph")]
    MissingToken,

    #[error("Failed to query the dependency graph of {repository}\nDetails: {details}")]
    GraphQuery { repository: String, details: String },

    #[error("No dependencies found for {repository}\n\n💡 Hint: Verify that the dependency graph is enabled for the repository (Settings > Code security and analysis)")]
    EmptyDependencyGraph { repository: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
