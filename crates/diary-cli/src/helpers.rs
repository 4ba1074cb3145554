//! Input and parsing helper functions for the CLI.

use std::io::{self, IsTerminal, Read, Write};
use std::process::Command;

use chrono::{Datelike, Duration, Local, NaiveDate};
use log::warn;
use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use crate::errors::CliError;

/// Parse a date argument: `YYYY-MM-DD`, `today` or `yesterday`. Defaults to
/// today's local date.
pub fn parse_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    parse_date_from(value, Local::now().date_naive())
}

fn parse_date_from(value: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match value.map(str::trim) {
        None | Some("today") => Ok(today),
        Some("yesterday") => Ok(today - Duration::days(1)),
        Some(other) => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            CliError::invalid_input(format!(
                "Invalid date (expected YYYY-MM-DD, today or yesterday): {}",
                other
            ))
            .into()
        }),
    }
}

/// Parse a `YYYY-MM` month argument into `(year, month)`. Defaults to the
/// current month.
pub fn parse_month(value: Option<&str>) -> anyhow::Result<(i32, u32)> {
    let today = Local::now().date_naive();
    match value {
        None => Ok((today.year(), today.month())),
        Some(text) => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
                .map_err(|_| {
                    CliError::invalid_input(format!(
                        "Invalid month (expected YYYY-MM): {}",
                        text
                    ))
                })?;
            Ok((first.year(), first.month()))
        }
    }
}

/// Read the new entry text from --body, stdin, or $EDITOR.
///
/// Unlike stdin and the editor, an explicit `--body ""` is accepted and
/// clears the entry. The editor starts with `current` loaded.
pub fn read_entry_body(
    no_input: bool,
    body: Option<String>,
    current: &str,
    editor_override: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = trim_trailing_newlines(&buffer);
        if trimmed.is_empty() {
            return Err(CliError::invalid_input("No input provided on stdin").into());
        }
        return Ok(trimmed.to_string());
    }

    if no_input {
        return Err(
            CliError::invalid_input("--no-input requires --body or content from stdin").into(),
        );
    }

    read_body_from_editor(current, editor_override)
}

/// Open $EDITOR to compose the entry text.
fn read_body_from_editor(current: &str, editor_override: Option<&str>) -> anyhow::Result<String> {
    let editor = editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
        })?;

    let scratch = editor_scratch_file(current)?;
    let status = Command::new(&editor)
        .arg(scratch.path())
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor {}: {}", editor, e));

    let contents = match status {
        Ok(status) if status.success() => std::fs::read_to_string(scratch.path())
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e)),
        Ok(_) => Err(anyhow::anyhow!("Editor exited with failure")),
        Err(err) => Err(err),
    };
    discard_scratch_file(scratch);

    Ok(trim_trailing_newlines(&contents?).to_string())
}

/// Private (0600 on unix), randomly named temp file holding `current`.
fn editor_scratch_file(current: &str) -> anyhow::Result<NamedTempFile> {
    let mut scratch = tempfile::Builder::new()
        .prefix("diary_entry_")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;
    scratch
        .write_all(current.as_bytes())
        .and_then(|_| scratch.flush())
        .map_err(|e| anyhow::anyhow!("Failed to write temp file: {}", e))?;
    Ok(scratch)
}

/// Overwrite the plaintext left in `scratch` with zeros, then delete it.
fn discard_scratch_file(scratch: NamedTempFile) {
    let path = scratch.path().to_path_buf();
    let len = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    if let Err(err) = std::fs::write(&path, vec![0u8; len as usize]) {
        warn!("could not wipe temp file {}: {}", path.display(), err);
    }
    if let Err(err) = scratch.close() {
        warn!("could not remove temp file {}: {}", path.display(), err);
    }
}

fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_keywords_and_iso() {
        let today = date(2024, 3, 1);

        assert_eq!(parse_date_from(None, today).unwrap(), today);
        assert_eq!(parse_date_from(Some("today"), today).unwrap(), today);
        assert_eq!(
            parse_date_from(Some("yesterday"), today).unwrap(),
            date(2024, 2, 29)
        );
        assert_eq!(
            parse_date_from(Some("2024-01-15"), today).unwrap(),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for value in ["2024-02-30", "15/01/2024", "tomorrow", ""] {
            let err = parse_date_from(Some(value), date(2024, 3, 1)).unwrap_err();
            assert!(err.downcast_ref::<CliError>().is_some(), "{}", value);
        }
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2024-02")).unwrap(), (2024, 2));
        assert!(parse_month(Some("2024-13")).is_err());
        assert!(parse_month(Some("February")).is_err());
    }

    #[test]
    fn test_explicit_empty_body_is_kept() {
        let body = read_entry_body(true, Some(String::new()), "old text", None).unwrap();
        assert_eq!(body, "");
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_scratch_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let scratch = editor_scratch_file("Dear diary").unwrap();
        let path = scratch.path().to_path_buf();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("diary_entry_"), "{}", name);
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "mode {:o}", mode);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dear diary");

        discard_scratch_file(scratch);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unchanged_editor_keeps_current_text() {
        let body = read_body_from_editor("current text\n", Some("true")).unwrap();
        assert_eq!(body, "current text");

        let err = read_body_from_editor("current text", Some("false")).unwrap_err();
        assert!(err.to_string().contains("Editor exited with failure"));
    }

    #[test]
    fn test_trim_trailing_newlines_only() {
        assert_eq!(trim_trailing_newlines("  text\n\n"), "  text");
        assert_eq!(trim_trailing_newlines("a\r\n"), "a");
        assert_eq!(trim_trailing_newlines("\n"), "");
    }
}
