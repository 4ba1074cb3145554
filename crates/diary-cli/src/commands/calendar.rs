//! Month overview: which days have entries.

use std::io::IsTerminal;

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use diary_core::storage::EntryStore;
use diary_core::EntryStorage;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_month;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (year, month) = parse_month(args.month.as_deref())?;
    let store = ctx.store()?;
    let dates = store.entry_dates_in_month(year, month)?;

    if args.json {
        let values: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if !std::io::stdout().is_terminal() {
        for date in &dates {
            println!("{}", date);
        }
        return Ok(());
    }

    if dates.is_empty() {
        if !ctx.quiet() {
            println!("No entries in {}-{:02}.", year, month);
        }
        return Ok(());
    }

    println!("{}", render_table(&store, &dates));
    Ok(())
}

fn render_table(store: &EntryStore, dates: &[NaiveDate]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Day", "File"]);

    for date in dates {
        table.add_row(vec![
            date.to_string(),
            date.format("%A").to_string(),
            store.path_for(*date).display().to_string(),
        ]);
    }

    table.to_string()
}
