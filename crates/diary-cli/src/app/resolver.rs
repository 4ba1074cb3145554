//! Path resolution for the config file and the entry layout.

use std::path::PathBuf;

use diary_core::storage::LayoutConfig;

use crate::cli::Cli;
use crate::config::{default_config_path, default_root_path, read_config, DiaryConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking DIARY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit_config_path() {
        return Ok(path);
    }
    default_config_path()
}

fn explicit_config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the config file if there is one.
///
/// A missing default config is not an error: the built-in layout is used.
/// A missing file named by DIARY_CONFIG is.
pub fn load_config() -> anyhow::Result<Option<DiaryConfig>> {
    let explicit = explicit_config_path();
    let path = match explicit.clone() {
        Some(path) => path,
        None => default_config_path()?,
    };

    if !path.exists() {
        if explicit.is_some() {
            return Err(CliError::not_found(
                format!("No config found at {}", path.display()),
                format!(
                    "Hint: Run `diary init` with {} set, or unset it to use the default.",
                    CONFIG_ENV
                ),
            )
            .into());
        }
        return Ok(None);
    }

    read_config(&path).map(Some)
}

/// Build the layout from the config (or defaults), with `--root` taking
/// precedence over the configured root.
pub fn resolve_layout(cli: &Cli, config: Option<&DiaryConfig>) -> anyhow::Result<LayoutConfig> {
    let mut layout = match config {
        Some(config) => config.storage.clone(),
        None => LayoutConfig::new(default_root_path()?),
    };
    if let Some(root) = cli.root.as_deref() {
        layout.root = PathBuf::from(root);
    }
    Ok(layout)
}
