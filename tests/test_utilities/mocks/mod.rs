/// Mock implementations for testing
mod mock_graph_source;
mod mock_license_repository;
mod mock_metadata_repository;
mod mock_progress_reporter;

pub use mock_graph_source::{record, MockGraphSource};
pub use mock_license_repository::MockLicenseRepository;
pub use mock_metadata_repository::MockMetadataRepository;
pub use mock_progress_reporter::MockProgressReporter;
