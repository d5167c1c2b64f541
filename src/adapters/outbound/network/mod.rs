/// Network adapters for external API calls
mod clearly_defined_client;
mod github_client;

pub use clearly_defined_client::{ClearlyDefinedClient, DEFAULT_CLEARLYDEFINED_URL};
pub use github_client::{GitHubClient, GitHubEndpoints};
