/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the driven side: the GitHub dependency graph, the
/// license database, repository metadata, formatting, output and progress.
pub mod outbound;
