/// Use cases module containing application business logic orchestration
mod fetch_dependencies;
mod generate_sbom;

pub use fetch_dependencies::FetchDependenciesUseCase;
pub use generate_sbom::GenerateSbomUseCase;
