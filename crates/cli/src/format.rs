//! Output → string formatting.
//!
//! Two modes:
//! - **JSON** (default): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare values, e.g. the generated integer

use randint_executor::{Error, Output, Plan};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(output)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Raw => format_raw(output),
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::State(state) => state.id().to_string(),
        Output::Removed => String::new(),
        Output::Plan(Plan::Create) => "create".to_string(),
        Output::Plan(Plan::NoOp) => "no-op".to_string(),
        Output::Plan(Plan::Replace { attributes }) => {
            let names: Vec<&str> = attributes.iter().map(|a| a.as_str()).collect();
            format!("replace {}", names.join(","))
        }
    }
}

/// Format an error as its diagnostic.
pub fn format_error(err: &Error) -> String {
    let diagnostic = err.diagnostic();
    format!("Error: {}\n\n{}", diagnostic.summary, diagnostic.detail)
}
