/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (GitHub, the license database,
/// the console, the file system).
pub mod dependency_graph_source;
pub mod enriched_package;
pub mod formatter;
pub mod license_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_metadata;

pub use dependency_graph_source::{
    DependencyGraphSource, DependencyPage, DependencyRecord, ManifestNode, ManifestPage,
    PageInfo, PageRequest,
};
pub use enriched_package::EnrichedPackage;
pub use formatter::SbomFormatter;
pub use license_repository::LicenseRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_metadata::RepositoryMetadataRepository;
