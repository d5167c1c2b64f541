use clap::Parser;
use std::path::PathBuf;

/// Generate SBOMs from a GitHub repository's dependency graph
#[derive(Parser, Debug)]
#[command(name = "gh-sbom")]
#[command(version)]
#[command(
    about = "Generate SPDX or CycloneDX SBOMs from a GitHub repository's dependency graph",
    long_about = None
)]
pub struct Args {
    /// Repository to query: OWNER/REPO, HOST/OWNER/REPO or a git remote URL
    /// (defaults to GH_REPO, then the 'origin' remote of the current directory)
    #[arg(short, long, value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Output CycloneDX 1.4 instead of SPDX 2.3
    #[arg(short, long)]
    pub cyclonedx: bool,

    /// Include license information from ClearlyDefined
    #[arg(short, long)]
    pub license: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to gh-sbom.config.yml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
