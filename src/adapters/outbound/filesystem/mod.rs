/// Filesystem adapters for writing the SBOM document
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
