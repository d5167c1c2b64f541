/// Domain layer: value objects, pure services and policies
pub mod domain;
pub mod policies;
pub mod services;
