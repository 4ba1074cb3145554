//! Entry command handlers: show, write.

use diary_core::{EntryStorage, Outcome};

use crate::app::{AppContext, CliSession};
use crate::cli::{ShowArgs, WriteArgs};
use crate::helpers::{parse_date, read_entry_body};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let date = parse_date(args.date.as_deref())?;
    let mut session = ctx.session(args.no_input)?;

    // No entry: print nothing, and no password is needed.
    if !session.store().exists(date) {
        return Ok(());
    }

    let opened = session.open(date)?;
    let record = ready(&session, opened)?;
    if args.json {
        println!("{}", record.to_json()?);
    } else if !record.is_empty() {
        println!("{}", record.text());
    }
    Ok(())
}

pub fn handle_write(ctx: &AppContext, args: &WriteArgs) -> anyhow::Result<()> {
    let date = parse_date(args.date.as_deref())?;
    let mut session = ctx.session(args.no_input)?;

    let opened = session.open(date)?;
    let mut record = ready(&session, opened)?;
    let text = read_entry_body(
        args.no_input,
        args.body.clone(),
        record.text(),
        ctx.editor()?,
    )?;
    record.set_text(text);

    let saved = session.save(&record)?;
    ready(&session, saved)?;

    if !ctx.quiet() {
        println!("Saved entry for {}", date);
    }
    Ok(())
}

/// Unwrap a session outcome, turning a cancelled prompt into the matching
/// CLI error.
fn ready<T>(session: &CliSession, outcome: Outcome<T>) -> anyhow::Result<T> {
    match outcome {
        Outcome::Ready(value) => Ok(value),
        Outcome::Cancelled => Err(session.prompt().cancelled_error().into()),
    }
}
