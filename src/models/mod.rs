//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod prompt;
pub mod response;
pub mod settings;

pub use prompt::*;
pub use response::*;
pub use settings::*;
