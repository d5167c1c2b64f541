//! Configuration file support for gh-sbom.
//!
//! Provides YAML-based configuration through `gh-sbom.config.yml` files and
//! resolves the effective settings from CLI flags, environment variables, the
//! configuration file and built-in defaults, in that order of precedence.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::{GitHubEndpoints, DEFAULT_CLEARLYDEFINED_URL};
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::sbom_generation::domain::RepositoryRef;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gh-sbom.config.yml";

pub const ENV_REPOSITORY: &str = "GH_REPO";
pub const ENV_API_URL: &str = "GH_SBOM_API_URL";
pub const ENV_GRAPHQL_URL: &str = "GH_SBOM_GRAPHQL_URL";
pub const ENV_CLEARLYDEFINED_URL: &str = "GH_SBOM_CLEARLYDEFINED_URL";
/// Checked in order; the first non-empty value wins
pub const ENV_TOKENS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repository: Option<String>,
    pub format: Option<String>,
    pub license: Option<bool>,
    pub api_url: Option<String>,
    pub graphql_url: Option<String>,
    pub clearlydefined_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// The config named by `--config`, or the one discovered in `working_dir`
pub fn load_for_args(args: &Args, working_dir: &Path) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(working_dir),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        parse_format(format)?;
    }

    let urls = [
        ("api_url", &config.api_url),
        ("graphql_url", &config.graphql_url),
        ("clearlydefined_url", &config.clearlydefined_url),
    ];
    for (key, value) in urls {
        if let Some(url) = value {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(SbomError::InvalidConfig {
                    message: format!(
                        "'{}' must be an http(s) URL, got '{}'\n\n💡 Hint: Use a full URL such as https://api.github.com",
                        key, url
                    ),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value
        .parse::<OutputFormat>()
        .map_err(|message| SbomError::InvalidConfig { message }.into())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Reads a process environment variable, treating blank values as unset
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// API token from `GH_TOKEN`, then `GITHUB_TOKEN`
pub fn resolve_token<F>(env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    ENV_TOKENS
        .iter()
        .find_map(|key| env(key))
        .ok_or_else(|| SbomError::MissingToken.into())
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Unresolved repository input; `None` means "use the git origin"
    pub repository: Option<String>,
    pub format: OutputFormat,
    pub fetch_licenses: bool,
    pub output: Option<PathBuf>,
    pub clearlydefined_url: String,
    api_url: Option<String>,
    graphql_url: Option<String>,
}

impl Settings {
    /// Merges CLI flags, environment (through `env`) and the config file
    pub fn resolve<F>(args: &Args, config: Option<ConfigFile>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = config.unwrap_or_default();

        let format = if args.cyclonedx {
            OutputFormat::CycloneDx
        } else {
            match config.format.as_deref() {
                Some(value) => parse_format(value)?,
                None => OutputFormat::default(),
            }
        };

        let repository = args
            .repository
            .clone()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| env(ENV_REPOSITORY))
            .or(config.repository);

        Ok(Self {
            repository,
            format,
            fetch_licenses: args.license || config.license.unwrap_or(false),
            output: args.output.clone(),
            clearlydefined_url: env(ENV_CLEARLYDEFINED_URL)
                .or(config.clearlydefined_url)
                .unwrap_or_else(|| DEFAULT_CLEARLYDEFINED_URL.to_string()),
            api_url: env(ENV_API_URL).or(config.api_url),
            graphql_url: env(ENV_GRAPHQL_URL).or(config.graphql_url),
        })
    }

    /// GitHub endpoints for the resolved repository, honoring overrides
    pub fn endpoints_for(&self, repository: &RepositoryRef) -> GitHubEndpoints {
        let defaults = GitHubEndpoints::for_host(repository.host());
        GitHubEndpoints {
            api_url: self.api_url.clone().unwrap_or(defaults.api_url),
            graphql_url: self.graphql_url.clone().unwrap_or(defaults.graphql_url),
        }
    }
}
