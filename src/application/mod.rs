/// Application layer
///
/// Walks the dependency graph, enriches licenses and shapes the result
/// into the read model both document formats render from.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
