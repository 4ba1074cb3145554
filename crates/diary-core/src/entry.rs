//! Diary entry records.
//!
//! A record is one calendar date plus its text. The serialized form is a JSON
//! object with exactly two keys, `date` (ISO `YYYY-MM-DD`) and `entry`, in that
//! order:
//!
//! ```json
//! {"date":"2024-01-15","entry":"Hello diary"}
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DiaryError, Result};

/// One diary entry.
///
/// The text is never absent: a date with nothing written holds an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Calendar date of the entry (no time or zone)
    date: NaiveDate,

    /// Entry body
    #[serde(rename = "entry")]
    text: String,
}

impl EntryRecord {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }

    /// A record for a date that has nothing written yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, String::new())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Serialize to the canonical compact JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Format` if the input is not a JSON object, if
    /// `date` or `entry` is missing, if `entry` is not a string, or if `date`
    /// is not an ISO local date. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DiaryError::Format(
                "Entry must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}
