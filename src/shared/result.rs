/// Crate-wide Result alias; fatal errors are carried as `anyhow::Error`
/// wrapping an `SbomError` where the failure is user-facing.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
