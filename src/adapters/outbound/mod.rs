/// Outbound adapters implementing the ports in `crate::ports::outbound`
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod git;
pub mod network;
