//! JSON response envelope.
//!
//! - Success: `{"ok": true, "result": <Output>}`
//! - Failure: `{"ok": false, "error": {"code", "message", "summary", "detail"}}`

use serde::{Deserialize, Serialize};

use crate::{Error, Output};

/// Wire response for one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Success or failure
    pub ok: bool,
    /// Result (if ok=true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Output>,
    /// Error (if ok=false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Error payload of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code (e.g. "InvalidRange", "ImportField")
    pub code: String,
    /// Short machine-oriented message
    pub message: String,
    /// Diagnostic title
    pub summary: String,
    /// Diagnostic detail
    pub detail: String,
}

impl From<&Error> for ApiError {
    fn from(err: &Error) -> Self {
        let diagnostic = err.diagnostic();
        ApiError {
            code: err.code().to_string(),
            message: err.to_string(),
            summary: diagnostic.summary,
            detail: diagnostic.detail,
        }
    }
}

impl Response {
    /// Create a success response
    pub fn success(result: Output) -> Self {
        Response {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn failure(err: &Error) -> Self {
        Response {
            ok: false,
            result: None,
            error: Some(err.into()),
        }
    }
}

impl From<crate::Result<Output>> for Response {
    fn from(r: crate::Result<Output>) -> Self {
        match r {
            Ok(output) => Response::success(output),
            Err(e) => Response::failure(&e),
        }
    }
}

/// Encode a response, falling back to a fixed error body if encoding fails
pub fn encode_response(response: &Response) -> String {
    match serde_json::to_string(response) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(target: "randint::executor", error = %e, "Failed to encode response");
            r#"{"ok":false,"error":{"code":"Serialization","message":"serialization error","summary":"Serialization Error","detail":"response could not be encoded"}}"#
                .to_string()
        }
    }
}
