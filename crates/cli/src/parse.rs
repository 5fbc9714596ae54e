//! Parsed arguments → Command conversion.
//!
//! Translates clap's parsed arguments into the action to run:
//! - `create` / `import` → `CliAction::Execute(Command)`
//! - `exec` → `CliAction::ExecJson`
//! - `init` → `CliAction::Init`

use std::io::Read;
use std::path::PathBuf;

use randint_executor::{Command, Error, IntegerRequest, Keepers, CONFIG_FILE_NAME};

use crate::commands::{CliCommand, CreateArgs};

/// The result of parsing user input.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// A command to execute.
    Execute(Command),
    /// A raw JSON command to pass through `execute_json`.
    ExecJson(String),
    /// Write the default config file.
    Init(PathBuf),
}

/// Convert a parsed subcommand into an action.
///
/// `stdin` is only read for `exec` without an inline argument.
pub fn to_action(command: CliCommand, stdin: impl Read) -> Result<CliAction, Error> {
    match command {
        CliCommand::Create(args) => Ok(CliAction::Execute(Command::Create {
            request: to_request(args)?,
        })),
        CliCommand::Import { id } => Ok(CliAction::Execute(Command::Import { id })),
        CliCommand::Exec { json: Some(json) } => Ok(CliAction::ExecJson(json)),
        CliCommand::Exec { json: None } => read_all(stdin).map(CliAction::ExecJson),
        CliCommand::Init { path } => Ok(CliAction::Init(
            path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        )),
    }
}

fn to_request(args: CreateArgs) -> Result<IntegerRequest, Error> {
    let mut request = IntegerRequest::new(args.min, args.max);
    request.seed = args.seed;
    if !args.keepers.is_empty() {
        request.keepers = Some(parse_keepers(&args.keepers)?);
    }
    Ok(request)
}

/// Parse `KEY=VALUE` pairs; later duplicates win.
pub fn parse_keepers(pairs: &[String]) -> Result<Keepers, Error> {
    let mut keepers = Keepers::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| Error::InvalidInput {
            reason: format!("keeper '{}' must be KEY=VALUE", pair),
        })?;
        keepers.insert(key.to_string(), value.to_string());
    }
    Ok(keepers)
}

fn read_all(mut stdin: impl Read) -> Result<String, Error> {
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| Error::InvalidInput {
            reason: format!("failed to read command from stdin: {}", e),
        })?;
    Ok(buf)
}
