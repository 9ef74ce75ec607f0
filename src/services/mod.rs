//! Business Logic Services
//!
//! The grid controller and the persistence service it calls into.

pub mod grid;
pub mod prompt;

pub use grid::*;
pub use prompt::*;
