//! Configuration validation
//!
//! Validates the engine configuration before any registry is loaded.

mod error;
mod validator;


pub use error::ValidationError;
pub use validator::validate_config;
