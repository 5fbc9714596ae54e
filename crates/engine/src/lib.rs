//! Generation and lifecycle engine for the integer resource
//!
//! Data flows one way on create:
//! request -> [`range::validate`] -> [`generate::generate`] -> state record.
//! Import runs independently: identifier -> [`import::decode`] -> state record.
//!
//! [`IntegerController`] ties the pieces together and is the entry point a
//! host drives.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod generate;
pub mod import;
pub mod lifecycle;
pub mod range;
pub mod source;

pub use config::{RandintConfig, CONFIG_FILE_NAME};
pub use generate::{generate, generate_with};
pub use lifecycle::IntegerController;
pub use range::{validate, IntRange};
pub use source::{source_for, AmbientSource, EntropySource, SeededSource};
