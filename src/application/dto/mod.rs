/// Request/response values passed between the CLI and the use cases
mod output_format;
mod sbom_request;
mod sbom_response;

pub use output_format::OutputFormat;
pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
