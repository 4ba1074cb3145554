//! Terminal password prompt for the password session.

use std::io::IsTerminal;

use dialoguer::Password;
use diary_core::session::{PasswordPrompt, PromptReply, RETRY_PASSWORD_MESSAGE};
use log::debug;
use zeroize::Zeroizing;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Password source for the CLI.
///
/// `DIARY_PASSWORD` is offered once as the first candidate. After that the
/// user is asked on the terminal when one is available; otherwise the prompt
/// cancels. An empty answer also cancels.
pub struct TerminalPrompt {
    env_password: Option<Zeroizing<String>>,
    interactive: bool,
    rejected: bool,
}

impl TerminalPrompt {
    pub fn new(no_input: bool) -> Self {
        let env_password = std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Zeroizing::new);
        Self::with_sources(env_password, std::io::stdin().is_terminal() && !no_input)
    }

    fn with_sources(env_password: Option<Zeroizing<String>>, interactive: bool) -> Self {
        Self {
            env_password,
            interactive,
            rejected: false,
        }
    }

    /// Whether a password was rejected during this run.
    pub fn rejected(&self) -> bool {
        self.rejected
    }

    /// The error to report once the session has been cancelled.
    pub fn cancelled_error(&self) -> CliError {
        if self.rejected() {
            CliError::auth_failed_with_hint(
                "Invalid password.",
                format!(
                    "Hint: Check {} or run in a terminal to try again.",
                    PASSWORD_ENV
                ),
            )
        } else {
            CliError::cancelled("Password entry cancelled; nothing was changed.")
        }
    }
}

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&mut self, message: &str) -> PromptReply {
        if message == RETRY_PASSWORD_MESSAGE {
            self.rejected = true;
        }

        if let Some(password) = self.env_password.take() {
            debug!("trying password from {}", PASSWORD_ENV);
            return PromptReply::password(password.as_str());
        }

        if !self.interactive {
            debug!("no terminal for the password prompt");
            return PromptReply::Cancelled;
        }

        match Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
        {
            Ok(value) if value.is_empty() => PromptReply::Cancelled,
            Ok(value) => PromptReply::password(value),
            Err(err) => {
                debug!("password prompt failed: {}", err);
                PromptReply::Cancelled
            }
        }
    }
}
