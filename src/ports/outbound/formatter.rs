use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// One implementation per document format (SPDX JSON, CycloneDX JSON).
/// The format is chosen once at startup; formatters never branch on it.
pub trait SbomFormatter {
    /// Renders the complete document for the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
