/// Formatter adapters for the supported SBOM document formats
mod cyclonedx_formatter;
mod spdx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use spdx_formatter::SpdxFormatter;
