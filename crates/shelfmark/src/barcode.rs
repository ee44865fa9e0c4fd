use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use shelfmark_barcode::{Barcode, RenderOptions};
use shelfmark_inventory::Inventory;

#[derive(Args, Debug, Clone)]
#[command(about = "Render an item's barcode")]
pub struct BarcodeArgs {
    /// Item identifier (case-insensitive)
    #[arg(value_name = "ITEM_ID")]
    pub id: String,

    /// Write a PNG to the output directory instead of drawing in the terminal
    #[arg(long)]
    pub png: bool,
}

pub fn execute(args: BarcodeArgs, inventory: &Inventory, out_dir: &Path) -> Result<()> {
    let item = inventory
        .find_by_id(&args.id)
        .ok_or_else(|| anyhow::anyhow!("no item found with ID `{}`", args.id))?;

    let barcode = Barcode::encode(&item.barcode)
        .with_context(|| format!("cannot encode barcode for item `{}`", item.item_id))?;

    if args.png {
        let path = barcode.save_to_dir(&item.item_id, out_dir, &RenderOptions::default())?;
        println!(
            "{} barcode for {} ({}) written to {}",
            barcode.symbology(),
            item.name.bold(),
            item.item_id,
            path.display()
        );
    } else {
        println!("{} ({}) [{}]", item.name.bold(), item.item_id, barcode.symbology());
        barcode.render_terminal(&mut io::stdout().lock())?;
    }
    Ok(())
}
