//! Mapping from calendar dates to entry file paths.
//!
//! An entry for `date` lives at `root/<dir name>/<file name>.json`, where both
//! names are produced by `strftime`-style date patterns. The directory name is
//! split on the configured separator into nested directories. When no file
//! pattern is configured it is derived from the directory pattern by replacing
//! every separator with `-`.
//!
//! With the defaults, 2024-01-15 maps to `root/2024/01/15/2024-01-15.json`.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DiaryError, Result};

/// Extension of entry files. The content is base64 ciphertext, not JSON.
pub const ENTRY_EXTENSION: &str = "json";

/// Default directory pattern.
pub const DEFAULT_DIR_FORMAT: &str = "%Y/%m/%d";

/// Default separator between directory levels in the directory pattern.
pub const DEFAULT_SEPARATOR: char = '/';

/// Storage layout settings, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Root directory holding all entries
    pub root: PathBuf,

    /// Pattern for the directory part of an entry path
    #[serde(default = "default_dir_format")]
    pub dir_format: String,

    /// Pattern for the file name (without extension); derived when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,

    /// Separator between directory levels in `dir_format`
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_dir_format() -> String {
    DEFAULT_DIR_FORMAT.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl LayoutConfig {
    /// Default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dir_format: default_dir_format(),
            file_format: None,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// The file pattern in effect: the configured one, or the directory
    /// pattern with separators replaced by `-`.
    pub fn effective_file_format(&self) -> String {
        match &self.file_format {
            Some(format) => format.clone(),
            None => self.dir_format.replace(self.separator, "-"),
        }
    }
}

/// Validated date → path mapping.
#[derive(Debug, Clone)]
pub struct PathLayout {
    root: PathBuf,
    dir_format: String,
    file_format: String,
    separator: char,
}

impl PathLayout {
    /// Validate `config` and build the layout.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if:
    /// - Either pattern is not a valid date-only `strftime` pattern
    /// - The file pattern contains a path separator or formats to nothing
    /// - A directory level would be `.` or `..`
    /// - Two different days would share a file
    pub fn new(config: LayoutConfig) -> Result<Self> {
        let file_format = config.effective_file_format();
        let layout = Self {
            root: config.root,
            dir_format: config.dir_format,
            file_format,
            separator: config.separator,
        };

        let samples = sample_dates();
        validate_pattern("directory", &layout.dir_format, &samples)?;
        validate_pattern("file", &layout.file_format, &samples)?;
        layout.validate_names(&samples)?;
        layout.validate_day_granularity(&samples)?;

        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir_format(&self) -> &str {
        &self.dir_format
    }

    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Directory name for `date`, before splitting on the separator.
    pub fn dir_name(&self, date: NaiveDate) -> String {
        date.format(&self.dir_format).to_string()
    }

    /// File name for `date`, including the extension.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}.{}", date.format(&self.file_format), ENTRY_EXTENSION)
    }

    /// Path of the entry file for `date`.
    ///
    /// Pure: the same date and layout always give the same path.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        let mut path = self.root.clone();
        let dir_name = self.dir_name(date);
        for component in dir_name.split(self.separator).filter(|c| !c.is_empty()) {
            path.push(component);
        }
        path.push(self.file_name(date));
        path
    }

    fn validate_names(&self, samples: &[NaiveDate]) -> Result<()> {
        for &date in samples {
            let file_stem = date.format(&self.file_format).to_string();
            if file_stem.trim().is_empty() {
                return Err(DiaryError::InvalidInput(format!(
                    "File format \"{}\" produces an empty file name",
                    self.file_format
                )));
            }
            if file_stem.contains('/') || file_stem.contains('\\') {
                return Err(DiaryError::InvalidInput(format!(
                    "File format \"{}\" must not contain a path separator",
                    self.file_format
                )));
            }

            let dir_name = self.dir_name(date);
            if dir_name
                .split(self.separator)
                .flat_map(|level| level.split(['/', '\\']))
                .any(|level| level == "." || level == "..")
            {
                return Err(DiaryError::InvalidInput(format!(
                    "Directory format \"{}\" must not contain \".\" or \"..\" levels",
                    self.dir_format
                )));
            }
        }

        Ok(())
    }

    fn validate_day_granularity(&self, samples: &[NaiveDate]) -> Result<()> {
        let mut seen = HashMap::new();
        for &date in samples {
            if let Some(other) = seen.insert(self.path_for(date), date) {
                return Err(DiaryError::InvalidInput(format!(
                    "Layout \"{}\" / \"{}\" maps {} and {} to the same file; include the full year and the day",
                    self.dir_format, self.file_format, other, date
                )));
            }
        }
        Ok(())
    }
}

/// First day of the two-year window every layout is checked against.
const SAMPLE_WINDOW_START: (i32, u32, u32) = (2023, 1, 1);

/// 2023 and the leap year 2024.
const SAMPLE_WINDOW_DAYS: usize = 365 + 366;

/// The same day in other centuries, to catch two-digit years.
const CENTURY_SAMPLES: [(i32, u32, u32); 4] =
    [(1924, 1, 15), (2124, 1, 15), (2524, 1, 15), (3024, 1, 15)];

/// Dates a layout must keep apart: every day of two consecutive years plus
/// one day in several other centuries.
fn sample_dates() -> Vec<NaiveDate> {
    let (year, month, day) = SAMPLE_WINDOW_START;
    let window = NaiveDate::from_ymd_opt(year, month, day)
        .into_iter()
        .flat_map(|first| first.iter_days().take(SAMPLE_WINDOW_DAYS));
    let centuries = CENTURY_SAMPLES
        .iter()
        .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day));
    window.chain(centuries).collect()
}

fn validate_pattern(label: &str, pattern: &str, samples: &[NaiveDate]) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DiaryError::InvalidInput(format!(
            "Invalid {} format \"{}\"",
            label, pattern
        )));
    }

    // Time fields cannot be rendered from a bare date.
    let mut rendered = String::new();
    for date in samples {
        rendered.clear();
        if write!(rendered, "{}", date.format(pattern)).is_err() {
            return Err(DiaryError::InvalidInput(format!(
                "The {} format \"{}\" may only use date fields",
                label, pattern
            )));
        }
    }

    Ok(())
}
