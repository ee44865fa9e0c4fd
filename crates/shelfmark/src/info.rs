use std::io;

use anyhow::Result;
use clap::Args;
use shelfmark_inventory::Inventory;

use crate::render;

#[derive(Args, Debug, Clone)]
#[command(about = "Show full details for an item")]
pub struct InfoArgs {
    /// Item identifier (case-insensitive)
    #[arg(value_name = "ITEM_ID")]
    pub id: String,
}

pub fn execute(args: InfoArgs, inventory: &Inventory) -> Result<()> {
    let item = inventory
        .find_by_id(&args.id)
        .ok_or_else(|| anyhow::anyhow!("no item found with ID `{}`", args.id))?;
    render::write_details(item, io::stdout().lock())?;
    Ok(())
}
