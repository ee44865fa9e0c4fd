use std::io;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shelfmark_inventory::Inventory;

use crate::render;

#[derive(Args, Debug, Clone)]
#[command(about = "Search items by name (case-insensitive substring)")]
pub struct SearchArgs {
    /// Name or part of a name; omit to list everything
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,
}

pub fn execute(args: SearchArgs, inventory: &Inventory) -> Result<()> {
    let hits = inventory.search_by_name(&args.query);
    if hits.is_empty() {
        println!("No items found matching `{}`", args.query.bold());
        return Ok(());
    }

    println!("Found {} item(s) matching `{}`", hits.len(), args.query.bold());
    render::write_summary(hits, io::stdout().lock())?;
    Ok(())
}
