//! randint - seeded random integer resource
//!
//! A declarative resource whose value is an integer drawn from an inclusive
//! `[min, max]` range, reproducible when a seed is supplied. A host engine
//! drives its lifecycle (create, read, update, delete, import) and keeps the
//! state records; this crate never holds state between calls.
//!
//! # Quick Start
//!
//! ```ignore
//! use randint::{Command, Executor, IntegerRequest};
//!
//! let executor = Executor::new();
//!
//! // Same seed, same range, same value
//! let state = executor.execute(Command::Create {
//!     request: IntegerRequest::new(1, 6).with_seed("dice"),
//! })?;
//!
//! // Bring an existing value under management
//! let imported = executor.execute(Command::Import { id: "5,1,10".into() })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches to the
//! [`IntegerController`]. The generation primitives are available for hosts
//! that want them directly.

// Re-export the public API from randint-executor
pub use randint_executor::*;

pub use randint_core::{ImportError, RangeError};
pub use randint_engine::{generate, validate, IntRange, IntegerController};
