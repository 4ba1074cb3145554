//! `diary init`: write the config file describing the entry layout.

use diary_core::storage::{LayoutConfig, PathLayout};

use crate::app::{resolve_config_path, resolve_layout, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, DiaryConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Use --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let layout = build_layout(resolve_layout(ctx.cli(), None)?, args);
    // Reject layouts that would not give every day its own file.
    let validated = PathLayout::new(layout.clone())?;

    let config = DiaryConfig::new(layout, args.editor.clone());
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        println!("Wrote config to {}", config_path.display());
        println!("Entries will be stored under {}", validated.root().display());
    }
    Ok(())
}

fn build_layout(mut layout: LayoutConfig, args: &InitArgs) -> LayoutConfig {
    if let Some(dir_format) = args.dir_format.as_ref() {
        layout.dir_format = dir_format.clone();
    }
    if let Some(file_format) = args.file_format.as_ref() {
        layout.file_format = Some(file_format.clone());
    }
    if let Some(separator) = args.separator {
        layout.separator = separator;
    }
    layout
}
