//! # randint executor
//!
//! The public API for the integer resource.
//!
//! This is the only crate hosts need to import. It provides:
//! - [`Executor`] - Command dispatcher over the lifecycle controller
//! - [`Command`]/[`Output`] - Serializable instruction set
//! - [`Error`] - Structured, serializable errors with diagnostics
//!
//! ## Quick Start
//!
//! ```text
//! use randint_executor::{Command, Executor, IntegerRequest};
//!
//! let executor = Executor::new();
//! let output = executor.execute(Command::Create {
//!     request: IntegerRequest::new(1, 100).with_seed("stable"),
//! })?;
//!
//! let response = executor.execute_json(r#"{"Import":{"id":"5,1,10"}}"#);
//! ```

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
pub mod json;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export core and engine types so hosts don't need to import them
pub use randint_core::{
    Attribute, Diagnostic, ImportField, IntegerRequest, IntegerResource, Keepers, Plan,
};
pub use randint_engine::{RandintConfig, CONFIG_FILE_NAME};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
