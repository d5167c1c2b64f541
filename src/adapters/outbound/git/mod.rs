/// Git adapter resolving the ambient repository of the working directory
mod repository_resolver;

pub use repository_resolver::RepositoryResolver;
