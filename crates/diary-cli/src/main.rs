//! Diary CLI - a password-encrypted journal with one entry per day
//!
//! This is the command-line interface for Diary. It drives the core entry
//! store and password session from the terminal.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;

use clap::Parser;
use diary_core::{DiaryError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{calendar, entries, init, misc};
use crate::constants::LOG_ENV;
use crate::errors::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit()
        }
        if let Some(diary_err) = e.downcast_ref::<DiaryError>() {
            CliError::from_diary(diary_err).exit()
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Write(args)) => {
            entries::handle_write(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            calendar::handle_list(ctx, args)?;
        }
        Some(Commands::Path(args)) => {
            misc::handle_path(ctx, args)?;
        }
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Diary v{}", VERSION);
            println!("\nQuickstart:");
            println!("  diary init");
            println!("  diary write --body \"Hello diary\"");
            println!("  diary show");
            println!("  diary list");
            println!("\nRun `diary --help` for full usage.");
        }
    }

    Ok(())
}
