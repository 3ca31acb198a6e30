//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod usage_repository;

pub use usage_repository::*;
