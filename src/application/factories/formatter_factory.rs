use crate::adapters::outbound::formatters::{CycloneDxFormatter, SpdxFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// The document format is chosen once, here; nothing downstream branches on it.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use gh_sbom::application::dto::OutputFormat;
    /// use gh_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Spdx);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Spdx => Box::new(SpdxFormatter::new()),
            OutputFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Spdx => "📝 Generating SPDX 2.3 JSON document...",
            OutputFormat::CycloneDx => "📝 Generating CycloneDX 1.4 JSON document...",
        }
    }
}
