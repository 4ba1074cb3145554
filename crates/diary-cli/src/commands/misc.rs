use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs, PathArgs};
use crate::helpers::parse_date;

pub fn handle_path(ctx: &AppContext, args: &PathArgs) -> anyhow::Result<()> {
    let date = parse_date(args.date.as_deref())?;
    println!("{}", ctx.store()?.path_for(date).display());
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "diary", &mut std::io::stdout());
    Ok(())
}
