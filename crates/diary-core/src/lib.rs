//! # Diary Core
//!
//! Core library for Diary - a password-encrypted, one-entry-per-day journal.
//!
//! This crate provides the encrypted entry store and the password protocol,
//! independent of any user interface.
//!
//! ## Architecture
//!
//! - **crypto**: Blowfish codec and session key material
//! - **entry**: The entry record and its JSON form
//! - **storage**: Date → file layout and the filesystem entry store
//! - **session**: Password validation, retries and caching
//! - **error**: Tagged error taxonomy (crypto / format / I/O)
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use diary_core::session::{Outcome, PasswordSession, PromptReply};
//! use diary_core::storage::{EntryStore, LayoutConfig};
//!
//! let store = EntryStore::from_config(LayoutConfig::new("/home/me/diary"))?;
//! let mut session = PasswordSession::new(store, |_: &str| PromptReply::password("secret123"));
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! if let Outcome::Ready(mut entry) = session.open(date)? {
//!     entry.set_text("Hello diary");
//!     session.save(&entry)?;
//! }
//! # Ok::<(), diary_core::DiaryError>(())
//! ```

pub mod crypto;
pub mod entry;
pub mod error;
pub mod fs;
pub mod session;
pub mod storage;

pub use entry::EntryRecord;
pub use error::{DiaryError, ErrorKind, Result};
pub use session::{Outcome, PasswordPrompt, PasswordSession, PromptReply, SessionState};
pub use storage::{EntryStorage, EntryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
