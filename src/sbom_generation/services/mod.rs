mod dependency_normalizer;
mod purl_builder;
mod sbom_generator;

pub use dependency_normalizer::DependencyNormalizer;
pub use purl_builder::PurlBuilder;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
