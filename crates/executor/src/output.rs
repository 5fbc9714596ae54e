//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. The mapping is fixed:
//! the same command always produces the same output variant.

use randint_core::{IntegerResource, Plan};
use serde::{Deserialize, Serialize};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// State record to persist (create, read, update, import)
    State(IntegerResource),

    /// The record was destroyed; the host drops it from its state store
    Removed,

    /// Replacement plan
    Plan(Plan),
}

impl Output {
    /// The state record, if this output carries one
    pub fn into_state(self) -> Option<IntegerResource> {
        match self {
            Output::State(state) => Some(state),
            _ => None,
        }
    }
}
