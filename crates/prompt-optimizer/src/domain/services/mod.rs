//! Domain Services
//!
//! Stateless operations over catalog and usage entities.

mod placeholder;
mod ranking;

pub use placeholder::*;
pub use ranking::*;
