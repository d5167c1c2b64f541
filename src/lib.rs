//! gh-sbom - SBOM generation from a GitHub repository's dependency graph
//!
//! This library walks the dependency graph GitHub keeps for a repository,
//! optionally enriches every dependency with license data from ClearlyDefined,
//! and renders the result as an SPDX 2.3 or CycloneDX 1.4 JSON document.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Configuration** (`cli`, `config`): Command-line flags, config file and environment
//!
//! # Example
//!
//! ```no_run
//! use gh_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let repository = RepositoryRef::parse("octo/demo")?;
//!
//! // Create adapters
//! let github = GitHubClient::new(GitHubEndpoints::for_host(repository.host()), "token")?;
//! let licenses = ClearlyDefinedClient::new(DEFAULT_CLEARLYDEFINED_URL)?;
//!
//! // Create use case
//! let use_case = GenerateSbomUseCase::new(
//!     github.clone(),
//!     licenses,
//!     github,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case.execute(SbomRequest::new(repository, true))?;
//!
//! // Format output
//! let model = SbomReadModelBuilder::build(
//!     response.enriched_packages,
//!     &response.repository,
//!     response.repository_license.as_deref(),
//!     &response.metadata,
//! )?;
//! println!("{}", SpdxFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{CycloneDxFormatter, SpdxFormatter};
    pub use crate::adapters::outbound::git::RepositoryResolver;
    pub use crate::adapters::outbound::network::{
        ClearlyDefinedClient, GitHubClient, GitHubEndpoints, DEFAULT_CLEARLYDEFINED_URL,
    };
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::{FetchDependenciesUseCase, GenerateSbomUseCase};
    pub use crate::ports::outbound::{
        DependencyGraphSource, DependencyPage, DependencyRecord, EnrichedPackage,
        LicenseRepository, ManifestNode, ManifestPage, OutputPresenter, PageInfo, PageRequest,
        ProgressReporter, RepositoryMetadataRepository, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        DependencySet, LicenseInfo, Package, PackageDescriptor, RepositoryRef, SbomMetadata,
    };
    pub use crate::sbom_generation::policies::{LicensePriority, NOASSERTION};
    pub use crate::sbom_generation::services::{PurlBuilder, SbomGenerator};
    pub use crate::shared::error::SbomError;
    pub use crate::shared::Result;
}
