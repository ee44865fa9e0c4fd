use std::io;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shelfmark_inventory::Inventory;

use crate::render;

#[derive(Args, Debug, Clone)]
#[command(about = "List all inventory items")]
pub struct ListArgs {
    /// Only show items in this category (case-insensitive)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

pub fn execute(args: ListArgs, inventory: &Inventory) -> Result<()> {
    let items: Vec<_> = match &args.category {
        Some(category) => inventory
            .items()
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect(),
        None => inventory.items().iter().collect(),
    };

    if items.is_empty() {
        println!("{}", "No items to show".yellow());
        return Ok(());
    }

    let count = items.len();
    render::write_summary(items, io::stdout().lock())?;
    println!("{count} item(s)");
    Ok(())
}
