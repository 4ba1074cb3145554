use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

/// Diary - a password-encrypted journal with one entry per day
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory holding the entries (overrides the config file)
    #[arg(short, long, global = true, env = "DIARY_ROOT")]
    pub root: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the entry for a date
    Show(ShowArgs),

    /// Write or replace the entry for a date
    Write(WriteArgs),

    /// List the dates of a month that have entries
    List(ListArgs),

    /// Print the file path used for a date
    Path(PathArgs),

    /// Write the config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Date of the entry (YYYY-MM-DD, "today" or "yesterday"; default today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Output the entry record as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Date of the entry (YYYY-MM-DD, "today" or "yesterday"; default today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Entry text (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Month to list (YYYY-MM; default current month)
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `path` command
#[derive(Args)]
pub struct PathArgs {
    /// Date (YYYY-MM-DD, "today" or "yesterday"; default today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory pattern (chrono strftime), levels split by --separator
    #[arg(long, value_name = "PATTERN")]
    pub dir_format: Option<String>,

    /// File name pattern without extension (default: derived from --dir-format)
    #[arg(long, value_name = "PATTERN")]
    pub file_format: Option<String>,

    /// Separator between directory levels in --dir-format
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Editor used by `write` (default: $EDITOR)
    #[arg(long)]
    pub editor: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
