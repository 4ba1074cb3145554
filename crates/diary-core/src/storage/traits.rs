//! Entry storage trait definition.
//!
//! `EntryStorage` is the interface the password session drives. The shipped
//! implementation is the filesystem-backed [`EntryStore`](super::EntryStore).

use chrono::{Datelike, NaiveDate};

use crate::crypto::SessionKey;
use crate::entry::EntryRecord;
use crate::error::{DiaryError, Result};

/// Encrypted, date-indexed entry storage.
///
/// All implementations must ensure:
/// - At most one entry per calendar date
/// - Entries are encrypted at rest
/// - Existence checks never decrypt anything
pub trait EntryStorage {
    /// Whether an entry has been written for `date`.
    ///
    /// This is an existence check only and says nothing about whether the
    /// entry can be decrypted with any particular key.
    fn exists(&self, date: NaiveDate) -> bool;

    /// Load and decrypt the entry for `date`.
    ///
    /// # Errors
    ///
    /// - `DiaryError::Io` if the entry is missing or unreadable
    /// - `DiaryError::Crypto` if decryption fails (usually a wrong password)
    /// - `DiaryError::Format` if the decrypted content is not a valid record
    fn load(&self, date: NaiveDate, key: &SessionKey) -> Result<EntryRecord>;

    /// Encrypt and write `record`, replacing any existing entry for its date.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Io` if the entry or its directories cannot be
    /// written.
    fn save(&self, record: &EntryRecord, key: &SessionKey) -> Result<()>;

    /// Dates within a calendar month that have an entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if `year`/`month` is not a valid
    /// calendar month.
    fn entry_dates_in_month(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DiaryError::InvalidInput(format!("Invalid month: {}-{:02}", year, month))
        })?;

        Ok(first
            .iter_days()
            .take_while(|date| date.month() == month)
            .filter(|date| self.exists(*date))
            .collect())
    }
}
