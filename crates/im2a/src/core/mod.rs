//! Core data model shared by the parser and the rendering core
//!
//! The configuration, its value types, the error taxonomy, and logging setup.

mod config;
mod error;
pub mod logging;
mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
