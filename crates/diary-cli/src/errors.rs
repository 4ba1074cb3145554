//! CLI error types for structured error handling.
//!
//! Each variant maps to a specific exit code. Core errors are translated
//! through [`CliError::from_diary`] at the top of `main`.

use std::fmt;
use std::io::IsTerminal;

use diary_core::DiaryError;
use owo_colors::OwoColorize;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (explicitly named config file)
    NotFound { message: String, hint: String },

    /// Password prompt ended after a wrong password
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Entry decrypted but could not be read as a record
    Corrupt { message: String, hint: String },

    /// File system failure while loading or saving
    Io(String),

    /// User declined to enter a password
    Cancelled(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Corrupt { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message)
            | CliError::Io(message)
            | CliError::Cancelled(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        CliError::Cancelled(message.into())
    }

    /// Translate a core error into its CLI counterpart.
    ///
    /// A `Crypto` error only reaches here from outside the password session
    /// (the session retries those), so it is reported as a failed password.
    pub fn from_diary(err: &DiaryError) -> Self {
        match err {
            DiaryError::Crypto(message) => CliError::AuthFailed {
                message: message.clone(),
                hint: None,
            },
            DiaryError::Format(message) => CliError::Corrupt {
                message: format!("Entry is corrupt: {}", message),
                hint: "Hint: The file was left untouched. Restore it from a backup or remove it."
                    .to_string(),
            },
            DiaryError::Io { .. } => CliError::Io(err.to_string()),
            DiaryError::InvalidInput(message) => CliError::InvalidInput(message.clone()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Corrupt { .. } => exit_codes::CORRUPT_ENTRY,
            CliError::Io(_) => exit_codes::IO_FAILED,
            CliError::Cancelled(_) => exit_codes::CANCELLED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        if std::io::stderr().is_terminal() {
            eprintln!("{} {}", "Error:".red().bold(), self);
        } else {
            eprintln!("Error: {}", self);
        }
        std::process::exit(self.exit_code())
    }
}
