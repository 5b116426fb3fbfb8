//! Generation failures and error reporting
//!
//! A backend failure is a normal outcome of `generate`: it is carried inside the
//! response as a `GenerationFailure`, never raised to the caller.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::error::AiiacError;

/// Why the text-generation backend did not produce text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never completed (refused, DNS, timeout)
    Connection,
    /// The backend answered with a non-success status
    Status,
    /// The body was not JSON or lacked the generated text field
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Connection => "connection failure",
            FailureKind::Status => "unexpected status",
            FailureKind::MalformedBody => "malformed response",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{kind}: {message}")]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Connection, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Status, message)
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedBody, message)
    }

    /// Hint shown under a failed generation in the CLI
    pub fn suggested_action(&self) -> &'static str {
        match self.kind {
            FailureKind::Connection => {
                "Start the backend with 'ollama serve' or point --base-url at a running instance"
            }
            FailureKind::Status => {
                "Check that the model is pulled ('ollama pull <model>') and the backend logs"
            }
            FailureKind::MalformedBody => {
                "Verify that --base-url points at an Ollama-compatible /api/generate endpoint"
            }
        }
    }
}

/// Error Report Formatter
pub struct ErrorReporter;

impl ErrorReporter {
    /// Format a crate error with its hint, if any
    pub fn format_error(error: &AiiacError) -> String {
        let mut output = vec![format!("❌ {error}")];
        if let Some(hint) = error.user_hint() {
            output.push(hint.to_string());
        }
        output.join("\n")
    }

    /// Format an unsuccessful generation
    pub fn format_failed_generation(message: &str, failure: Option<&GenerationFailure>) -> String {
        let mut output = vec![format!("❌ Error: {message}")];
        if let Some(failure) = failure {
            output.push(format!("💡 {}", failure.suggested_action()));
        }
        output.join("\n")
    }
}
