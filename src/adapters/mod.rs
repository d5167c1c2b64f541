/// Adapters layer - the GitHub and ClearlyDefined transports, the git
/// resolver, document formatters and console/file output.
pub mod outbound;
