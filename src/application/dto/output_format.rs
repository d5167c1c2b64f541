/// Output format enumeration for SBOM generation
///
/// Shared by the CLI, the configuration file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// SPDX 2.3 JSON (default)
    #[default]
    Spdx,
    /// CycloneDX 1.4 JSON
    CycloneDx,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spdx" => Ok(OutputFormat::Spdx),
            "cyclonedx" | "cdx" => Ok(OutputFormat::CycloneDx),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'spdx' or 'cyclonedx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Spdx => write!(f, "spdx"),
            OutputFormat::CycloneDx => write!(f, "cyclonedx"),
        }
    }
}
