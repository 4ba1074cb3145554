//! Filesystem-backed entry storage.
//!
//! Each entry is one file at the path given by the [`PathLayout`]. The file
//! holds the base64 ciphertext of the record's canonical JSON and nothing
//! else.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::{debug, info};

use crate::crypto::{decrypt, encrypt, SessionKey};
use crate::entry::EntryRecord;
use crate::error::{DiaryError, Operation, Result};
use crate::fs::write_atomic;
use crate::storage::layout::{LayoutConfig, PathLayout};
use crate::storage::traits::EntryStorage;

/// Entry store rooted in a directory on disk.
#[derive(Debug, Clone)]
pub struct EntryStore {
    layout: PathLayout,
}

impl EntryStore {
    pub fn new(layout: PathLayout) -> Self {
        Self { layout }
    }

    /// Validate `config` and build a store from it.
    pub fn from_config(config: LayoutConfig) -> Result<Self> {
        Ok(Self::new(PathLayout::new(config)?))
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    /// Path of the entry file for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.layout.path_for(date)
    }
}

impl EntryStorage for EntryStore {
    fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    fn load(&self, date: NaiveDate, key: &SessionKey) -> Result<EntryRecord> {
        let path = self.path_for(date);
        debug!("loading entry for {} from {}", date, path.display());

        let bytes =
            fs::read(&path).map_err(|e| DiaryError::io(Operation::Load, date, &path, e))?;
        // Base64 is ASCII, so anything else is malformed ciphertext.
        let ciphertext = std::str::from_utf8(&bytes).map_err(|_| {
            DiaryError::Crypto(format!(
                "Entry file {} is not base64 text",
                path.display()
            ))
        })?;
        let plaintext = decrypt(ciphertext, key.as_bytes())?;
        let record = EntryRecord::from_json(&plaintext)?;

        if record.date() != date {
            return Err(DiaryError::Format(format!(
                "Entry file {} holds the entry for {}, expected {}",
                path.display(),
                record.date(),
                date
            )));
        }

        Ok(record)
    }

    fn save(&self, record: &EntryRecord, key: &SessionKey) -> Result<()> {
        let date = record.date();
        let path = self.path_for(date);

        let ciphertext = encrypt(&record.to_json()?, key.as_bytes())?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DiaryError::io(Operation::Save, date, parent, e))?;
        }
        write_atomic(&path, ciphertext.as_bytes())
            .map_err(|e| DiaryError::io(Operation::Save, date, &path, e))?;

        info!("saved entry for {} to {}", date, path.display());
        Ok(())
    }
}
