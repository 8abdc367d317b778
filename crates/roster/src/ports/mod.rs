//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! reaches the roster store.
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod repositories;

// Re-exports
pub use repositories::*;
