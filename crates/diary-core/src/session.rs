//! Password session: validation by trial decryption, with retries.
//!
//! A session starts without a password. The first time an encrypted entry
//! must be read or written it asks the [`PasswordPrompt`] for one and checks
//! it by decrypting an entry. A rejected password sends it back to the prompt
//! with [`RETRY_PASSWORD_MESSAGE`]; there is no attempt limit. The first
//! password that works is kept for the rest of the session.
//!
//! ```text
//! NoPassword ──prompt──▶ AwaitingInput ──decrypts──▶ Validated
//!                          │    ▲
//!                          │    └── wrong password
//!                          └──cancel──▶ Cancelled (terminal)
//! ```
//!
//! Cancelling is reported as [`Outcome::Cancelled`]; the session never ends
//! the process. I/O and format errors end the attempt without a retry.

use chrono::NaiveDate;
use log::{debug, warn};
use secrecy::{ExposeSecret, SecretString};

use crate::crypto::SessionKey;
use crate::entry::EntryRecord;
use crate::error::{ErrorKind, Result};
use crate::storage::EntryStorage;

/// Prompt message for the first password request.
pub const ENTER_PASSWORD_MESSAGE: &str = "Enter password";

/// Prompt message after a password was rejected.
pub const RETRY_PASSWORD_MESSAGE: &str = "Invalid password, try again";

/// What the prompt collaborator answered.
pub enum PromptReply {
    /// A candidate password
    Password(SecretString),
    /// The user declined to enter a password
    Cancelled,
}

impl PromptReply {
    pub fn password(value: impl Into<String>) -> Self {
        PromptReply::Password(SecretString::from(value.into()))
    }
}

/// Source of candidate passwords, usually an interactive dialog.
pub trait PasswordPrompt {
    /// Ask for a password, showing `message`.
    fn prompt(&mut self, message: &str) -> PromptReply;
}

impl<F> PasswordPrompt for F
where
    F: FnMut(&str) -> PromptReply,
{
    fn prompt(&mut self, message: &str) -> PromptReply {
        self(message)
    }
}

/// Where the session is in the password protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No password has been asked for yet
    NoPassword,
    /// Waiting on the prompt for a candidate
    AwaitingInput,
    /// A password has been validated and is cached
    Validated,
    /// The user declined to enter a password; terminal
    Cancelled,
}

/// Result of a session request that may be cancelled at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ready(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// The ready value, or `None` if cancelled.
    pub fn ready(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}

/// Password state for one running diary session.
pub struct PasswordSession<S, P> {
    store: S,
    prompt: P,
    state: SessionState,
    key: Option<SessionKey>,
}

impl<S, P> PasswordSession<S, P>
where
    S: EntryStorage,
    P: PasswordPrompt,
{
    pub fn new(store: S, prompt: P) -> Self {
        Self {
            store,
            prompt,
            state: SessionState::NoPassword,
            key: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_validated(&self) -> bool {
        self.state == SessionState::Validated
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Produce the entry for `date`.
    ///
    /// A date with no entry yields an empty record without asking for a
    /// password. Otherwise the cached password is used, or one is requested
    /// and validated against this entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Io` or `DiaryError::Format` from the store. Wrong
    /// passwords are never returned as errors; they lead back to the prompt.
    pub fn open(&mut self, date: NaiveDate) -> Result<Outcome<EntryRecord>> {
        if self.state == SessionState::Cancelled {
            return Ok(Outcome::Cancelled);
        }
        if !self.store.exists(date) {
            debug!("no entry for {}, starting empty", date);
            return Ok(Outcome::Ready(EntryRecord::empty(date)));
        }

        if let Some(key) = self.key.as_ref() {
            match self.store.load(date, key) {
                Ok(record) => return Ok(Outcome::Ready(record)),
                Err(err) if err.kind() == ErrorKind::Crypto => {
                    warn!("cached password does not decrypt the entry for {}", date);
                    return self.unlock(RETRY_PASSWORD_MESSAGE, |store, key| {
                        store.load(date, key)
                    });
                }
                Err(err) => return Err(err),
            }
        }

        self.unlock(ENTER_PASSWORD_MESSAGE, |store, key| store.load(date, key))
    }

    /// Encrypt and store `record`, replacing any entry for its date.
    ///
    /// Without a cached password one is requested first. If an entry already
    /// exists for the date the candidate must decrypt it; otherwise any
    /// password of usable length is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Io` if writing fails, or `DiaryError::Io` /
    /// `DiaryError::Format` if validating against the existing entry fails
    /// for a reason other than a wrong password.
    pub fn save(&mut self, record: &EntryRecord) -> Result<Outcome<()>> {
        if self.state == SessionState::Cancelled {
            return Ok(Outcome::Cancelled);
        }

        if self.key.is_none() {
            let date = record.date();
            let unlocked = self.unlock(ENTER_PASSWORD_MESSAGE, |store, key| {
                if store.exists(date) {
                    store.load(date, key).map(drop)
                } else {
                    Ok(())
                }
            })?;
            if unlocked.is_cancelled() {
                return Ok(Outcome::Cancelled);
            }
        }

        match self.key.as_ref() {
            Some(key) => {
                self.store.save(record, key)?;
                Ok(Outcome::Ready(()))
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Prompt until `attempt` succeeds with a candidate key or the user
    /// cancels. The successful key replaces any cached one.
    fn unlock<T, F>(&mut self, first_message: &str, mut attempt: F) -> Result<Outcome<T>>
    where
        F: FnMut(&S, &SessionKey) -> Result<T>,
    {
        let mut message = first_message;
        loop {
            self.state = SessionState::AwaitingInput;

            let candidate = match self.prompt.prompt(message) {
                PromptReply::Password(password) => password,
                PromptReply::Cancelled => {
                    debug!("password prompt cancelled");
                    self.key = None;
                    self.state = SessionState::Cancelled;
                    return Ok(Outcome::Cancelled);
                }
            };

            let key = match SessionKey::from_password(candidate.expose_secret()) {
                Ok(key) => key,
                Err(err) => {
                    warn!("password rejected: {}", err);
                    message = RETRY_PASSWORD_MESSAGE;
                    continue;
                }
            };

            match attempt(&self.store, &key) {
                Ok(value) => {
                    self.key = Some(key);
                    self.state = SessionState::Validated;
                    return Ok(Outcome::Ready(value));
                }
                Err(err) if err.kind() == ErrorKind::Crypto => {
                    warn!("password rejected: {}", err);
                    message = RETRY_PASSWORD_MESSAGE;
                }
                Err(err) => {
                    self.state = if self.key.is_some() {
                        SessionState::Validated
                    } else {
                        SessionState::NoPassword
                    };
                    return Err(err);
                }
            }
        }
    }
}
