//! Command enum defining all resource operations.
//!
//! Commands are the instruction set a host transport sends. Every lifecycle
//! call is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: Prior state travels with the command; nothing is cached

use randint_core::{IntegerRequest, IntegerResource};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable lifecycle operation.
///
/// | Command | Output |
/// |---------|--------|
/// | `Create` | `Output::State` |
/// | `Read` | `Output::State` |
/// | `Update` | `Output::State` |
/// | `Delete` | `Output::Removed` |
/// | `Import` | `Output::State` |
/// | `Plan` | `Output::Plan` |
///
/// # Example
///
/// ```ignore
/// use randint_executor::{Command, IntegerRequest};
///
/// let cmd = Command::Create {
///     request: IntegerRequest::new(1, 6).with_seed("dice"),
/// };
/// let json = serde_json::to_string(&cmd)?;
/// // {"Create":{"request":{"keepers":null,"min":1,"max":6,"seed":"dice"}}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Generate a new record from desired state.
    /// Returns: `Output::State`
    Create {
        /// Desired state
        request: IntegerRequest,
    },

    /// Refresh persisted state (returned verbatim).
    /// Returns: `Output::State`
    Read {
        /// Persisted record
        state: IntegerResource,
    },

    /// Apply desired state to prior state (no-op; all attributes replace).
    /// Returns: `Output::State`
    Update {
        /// Current record
        prior: IntegerResource,
        /// Desired state
        desired: IntegerRequest,
    },

    /// Destroy a record.
    /// Returns: `Output::Removed`
    Delete {
        /// Record to destroy
        state: IntegerResource,
    },

    /// Reconstruct state from `result,min,max[,seed]`.
    /// Returns: `Output::State`
    Import {
        /// Identifier `result,min,max[,seed]`
        id: String,
    },

    /// Compare prior state against desired state.
    /// Returns: `Output::Plan`
    Plan {
        /// Current record, absent before first create
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prior: Option<IntegerResource>,
        /// Desired state
        desired: IntegerRequest,
    },
}

impl Command {
    /// Operation name, used as a logging field
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Read { .. } => "read",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
            Command::Import { .. } => "import",
            Command::Plan { .. } => "plan",
        }
    }
}
