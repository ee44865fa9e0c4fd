use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use shelfmark_barcode::{Barcode, RenderOptions};
use shelfmark_inventory::{Inventory, Item};

#[derive(Args, Debug, Clone)]
#[command(about = "Generate an item's barcode image and show print instructions")]
pub struct PrintArgs {
    /// Item identifier (case-insensitive)
    #[arg(value_name = "ITEM_ID")]
    pub id: String,
}

pub fn execute(args: PrintArgs, inventory: &Inventory, out_dir: &Path) -> Result<()> {
    let item = inventory
        .find_by_id(&args.id)
        .ok_or_else(|| anyhow::anyhow!("no item found with ID `{}`", args.id))?;
    print_barcode(item, out_dir)
}

/// Rasterize the item's barcode into `out_dir` and print platform-appropriate
/// instructions for sending it to a printer. No spooler integration.
pub fn print_barcode(item: &Item, out_dir: &Path) -> Result<()> {
    let barcode = Barcode::encode(&item.barcode)
        .with_context(|| format!("cannot encode barcode for item `{}`", item.item_id))?;
    let path = barcode.save_to_dir(&item.item_id, out_dir, &RenderOptions::default())?;
    let path = std::fs::canonicalize(&path).unwrap_or(path);

    println!(
        "Barcode for {} ({}) written to {}",
        item.name.bold(),
        item.item_id,
        path.display()
    );
    println!("To print it:");
    if cfg!(windows) {
        println!("  1. Open the image and select Print, or");
        println!(
            "  2. Run: Start-Process -FilePath \"{}\" -Verb Print",
            path.display()
        );
    } else {
        println!("  1. Open the image and use the system print dialog, or");
        println!("  2. Run: lpr {}", path.display());
    }
    Ok(())
}
