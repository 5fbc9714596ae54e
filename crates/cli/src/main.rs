//! randint CLI: run one lifecycle command and print the result.
//!
//! - `randint create --min 1 --max 6 [--seed s] [--keeper k=v]...`
//! - `randint import 5,1,10[,seed]`
//! - `echo '{"Plan":{...}}' | randint exec`
//! - `randint init` writes a default `randint.toml`
//!
//! Results go to stdout as JSON (or bare values with `--raw`); diagnostics go
//! to stderr and the process exits non-zero.

mod commands;
mod format;
mod parse;

use std::path::Path;
use std::process;

use clap::Parser;
use randint_executor::{Error, Executor, RandintConfig, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::Cli;
use format::{format_error, format_output, OutputMode};
use parse::{to_action, CliAction};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    init_tracing(&config.log);
    tracing::debug!(
        target: "randint::cli",
        strict_import = config.strict_import,
        "Loaded configuration"
    );

    let mode = if cli.raw {
        OutputMode::Raw
    } else {
        OutputMode::Json
    };

    let action = match to_action(cli.command, std::io::stdin()) {
        Ok(action) => action,
        Err(e) => fail(&e),
    };

    let executor = Executor::with_config(&config);
    match action {
        CliAction::Execute(cmd) => match executor.execute(cmd) {
            Ok(output) => println!("{}", format_output(&output, mode)),
            Err(e) => fail(&e),
        },
        CliAction::ExecJson(json) => {
            let response = executor.execute_json_response(&json);
            match serde_json::to_string_pretty(&response) {
                Ok(s) => println!("{}", s),
                Err(e) => fail(&Error::Serialization {
                    reason: e.to_string(),
                }),
            }
            if !response.ok {
                process::exit(1);
            }
        }
        CliAction::Init(path) => {
            if let Err(e) = RandintConfig::write_default_if_missing(&path) {
                fail(&Error::from(e));
            }
            eprintln!("Config ready at {}", path.display());
        }
    }
}

/// Explicit `--config` must exist; the implicit `./randint.toml` is optional.
fn load_config(explicit: Option<&Path>) -> Result<RandintConfig, Error> {
    let loaded = match explicit {
        Some(path) => RandintConfig::from_file(path),
        None => RandintConfig::from_file_or_default(Path::new(CONFIG_FILE_NAME)),
    };
    loaded.map_err(Error::from)
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(err: &Error) -> ! {
    eprintln!("{}", format_error(err));
    process::exit(1);
}
