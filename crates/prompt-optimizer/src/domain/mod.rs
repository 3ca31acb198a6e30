//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, the template catalog, domain services, and errors.

mod builtin;
pub mod catalog;
pub mod entities;
pub mod errors;
pub mod services;

// Re-exports for convenience
pub use catalog::*;
pub use entities::*;
pub use errors::*;
pub use services::*;
