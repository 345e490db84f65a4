//! Shared CLI error handling and response types.

use serde::Serialize;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Validation failed (errors, or warnings in strict mode)
    ValidationFailed = 1,
    /// Bad arguments or an I/O failure
    Error = 2,
}

/// Error type carrying the exit code for a failed command.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// An I/O or environment failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Error,
            message: message.into(),
        }
    }

    /// A validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// A usage error (bad argument combination).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// One finding in a JSON validation response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Error kind label, absent for warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Context table the finding is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Button the finding is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Suggested fix, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// JSON response shape for `mousebind validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// All findings, errors first
    pub findings: Vec<ValidationMessage>,
}

/// JSON response shape for `mousebind resolve`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    /// Button id that was resolved
    pub button: String,
    /// Context the resolution ran in
    pub context: String,
    /// Resolved action id, or null when unmapped
    pub action: Option<String>,
    /// Parameters attached to the resolved action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
}
