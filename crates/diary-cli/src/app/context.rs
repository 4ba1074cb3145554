//! Application context for the Diary CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use diary_core::storage::EntryStore;
use diary_core::PasswordSession;

use crate::cli::Cli;
use crate::config::DiaryConfig;

use super::prompt::TerminalPrompt;
use super::resolver::{load_config, resolve_layout};

/// Password session over the on-disk store, prompting on the terminal.
pub type CliSession = PasswordSession<EntryStore, TerminalPrompt>;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DiaryConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. `None` when there is none.
    pub fn config(&self) -> anyhow::Result<Option<&DiaryConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    /// Get the configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.and_then(|c| c.ui.editor.as_deref()))
    }

    /// Entry store for the resolved layout.
    pub fn store(&self) -> anyhow::Result<EntryStore> {
        let layout = resolve_layout(self.cli, self.config()?)?;
        Ok(EntryStore::from_config(layout)?)
    }

    /// A fresh password session over the entry store.
    pub fn session(&self, no_input: bool) -> anyhow::Result<CliSession> {
        Ok(PasswordSession::new(
            self.store()?,
            TerminalPrompt::new(no_input),
        ))
    }
}
