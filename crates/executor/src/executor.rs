//! The Executor dispatches commands to their handlers.

use randint_engine::{IntegerController, RandintConfig};

use crate::json::{encode_response, Response};
use crate::{Command, Error, Output, Result};

/// Command dispatcher for the integer resource.
///
/// The executor is stateless apart from configuration: all state travels in
/// the commands and outputs, so one executor can serve many resources from
/// many threads.
///
/// # Example
///
/// ```ignore
/// use randint_executor::{Command, Executor, IntegerRequest, Output};
///
/// let executor = Executor::new();
/// let output = executor.execute(Command::Create {
///     request: IntegerRequest::new(1, 6),
/// })?;
///
/// let results = executor.execute_many(vec![
///     Command::Import { id: "5,1,10".into() },
///     Command::Import { id: "bad".into() },
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    controller: IntegerController,
}

impl Executor {
    /// Create an executor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor from loaded configuration.
    pub fn with_config(config: &RandintConfig) -> Self {
        Self {
            controller: IntegerController::with_config(config),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        tracing::debug!(target: "randint::executor", command = name, "Executing command");

        let c = &self.controller;
        let result = match cmd {
            Command::Create { request } => crate::handlers::resource::create(c, request),
            Command::Read { state } => crate::handlers::resource::read(c, state),
            Command::Update { prior, desired } => {
                crate::handlers::resource::update(c, prior, desired)
            }
            Command::Delete { state } => crate::handlers::resource::delete(c, state),
            Command::Import { id } => crate::handlers::resource::import(c, id),
            Command::Plan { prior, desired } => {
                crate::handlers::resource::plan(c, prior, desired)
            }
        };

        if let Err(e) = &result {
            tracing::debug!(target: "randint::executor", command = name, error = %e, "Command failed");
        }
        result
    }

    /// Execute multiple commands sequentially.
    ///
    /// Each command runs independently; a failure does not stop the rest.
    /// results[i] corresponds to cmds[i].
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Execute a JSON-encoded command and return a JSON response envelope.
    ///
    /// Malformed input yields an `InvalidInput` error response rather than an
    /// `Err`, so the caller always has something to send back.
    pub fn execute_json(&self, input: &str) -> String {
        encode_response(&self.execute_json_response(input))
    }

    /// Like [`execute_json`](Self::execute_json) but returns the undecoded envelope.
    pub fn execute_json_response(&self, input: &str) -> Response {
        match serde_json::from_str::<Command>(input) {
            Ok(cmd) => Response::from(self.execute(cmd)),
            Err(e) => Response::failure(&Error::InvalidInput {
                reason: e.to_string(),
            }),
        }
    }

    /// Get a reference to the underlying controller.
    pub fn controller(&self) -> &IntegerController {
        &self.controller
    }
}
