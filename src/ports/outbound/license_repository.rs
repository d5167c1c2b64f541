use crate::sbom_generation::domain::{LicenseInfo, PackageDescriptor};
use crate::sbom_generation::policies::LicensePriority;
use crate::shared::Result;

/// Raw license definition: (declared expression, discovered expressions)
pub type LicenseDefinition = (Option<String>, Vec<String>);

/// LicenseRepository port for fetching license information
///
/// This port abstracts the external license database used to look up
/// what a package declares and what scanners discovered in it.
pub trait LicenseRepository {
    /// Fetches the license definition for one package version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The descriptor has no recognized ecosystem or no version
    /// - The network request fails
    /// - The service returns an error status code
    /// - The response cannot be parsed
    fn fetch_license_definition(&self, descriptor: &PackageDescriptor)
        -> Result<LicenseDefinition>;

    /// Fetches the definition and applies the declared-wins precedence
    fn enrich_with_license(&self, descriptor: &PackageDescriptor) -> Result<LicenseInfo> {
        let (declared, discovered) = self.fetch_license_definition(descriptor)?;
        Ok(LicensePriority::create_license_info(declared, discovered))
    }
}
