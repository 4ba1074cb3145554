//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Config file named by `DIARY_CONFIG` does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Password prompt gave up after a wrong password.
    pub const AUTH_FAILED: i32 = 5;

    /// Entry decrypted but is not a valid record.
    pub const CORRUPT_ENTRY: i32 = 6;

    /// Reading or writing an entry file failed.
    pub const IO_FAILED: i32 = 7;

    /// Password prompt cancelled before any password was rejected.
    pub const CANCELLED: i32 = 8;
}

/// Environment variable offering the first candidate password.
pub const PASSWORD_ENV: &str = "DIARY_PASSWORD";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DIARY_CONFIG";

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "DIARY_LOG";
