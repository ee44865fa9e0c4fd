//! The interactive menu, entered when no subcommand is given.
//!
//! Mirrors the seven numbered actions of the classic warehouse menu. Lookup
//! misses and per-item barcode failures are reported and the loop continues;
//! only Exit (or prompt cancellation) leaves the loop.

use std::fmt;
use std::io;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, Select, Text};
use shelfmark_barcode::Barcode;
use shelfmark_inventory::{Inventory, Item};

use crate::{print, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ListAll,
    SearchById,
    SearchByName,
    GenerateBarcode,
    ItemDetails,
    PrintBarcode,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 7] = [
        MenuChoice::ListAll,
        MenuChoice::SearchById,
        MenuChoice::SearchByName,
        MenuChoice::GenerateBarcode,
        MenuChoice::ItemDetails,
        MenuChoice::PrintBarcode,
        MenuChoice::Exit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ListAll => "1. List All Items",
            Self::SearchById => "2. Search Item by ID",
            Self::SearchByName => "3. Search Item by Name",
            Self::GenerateBarcode => "4. Generate Barcode for Item",
            Self::ItemDetails => "5. Display Item Details",
            Self::PrintBarcode => "6. Print Barcode for Item",
            Self::Exit => "7. Exit",
        };
        write!(f, "{label}")
    }
}

pub fn run(inventory: &Inventory, out_dir: &Path) -> Result<()> {
    println!("{}", "WAREHOUSE BARCODE MANAGEMENT SYSTEM".bold());
    println!("{} items loaded", inventory.len());

    loop {
        println!();
        let choice = match Select::new("Main menu", MenuChoice::ALL.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                MenuChoice::Exit
            }
            Err(e) => return Err(e.into()),
        };

        match choice {
            MenuChoice::ListAll => {
                render::write_summary(inventory.items(), io::stdout().lock())?;
            }
            MenuChoice::SearchById | MenuChoice::ItemDetails => {
                if let Some(item) = prompt_item(inventory)? {
                    render::write_details(item, io::stdout().lock())?;
                }
            }
            MenuChoice::SearchByName => search_by_name(inventory)?,
            MenuChoice::GenerateBarcode => {
                if let Some(item) = prompt_item(inventory)? {
                    show_barcode(item);
                }
            }
            MenuChoice::PrintBarcode => {
                if let Some(item) = prompt_item(inventory)? {
                    if let Err(e) = print::print_barcode(item, out_dir) {
                        println!("{} {e:#}", "Error:".red());
                    }
                }
            }
            MenuChoice::Exit => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
        }
    }
}

/// Prompt for an item id and look it up. `Ok(None)` means the prompt was
/// cancelled or the id did not match; both report and keep the loop going.
fn prompt_item<'a>(inventory: &'a Inventory) -> Result<Option<&'a Item>> {
    let id = match Text::new("Item ID:").prompt() {
        Ok(id) => id.trim().to_ascii_uppercase(),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    match inventory.find_by_id(&id) {
        Some(item) => Ok(Some(item)),
        None => {
            println!("No item found with ID: {id}");
            Ok(None)
        }
    }
}

fn search_by_name(inventory: &Inventory) -> Result<()> {
    let query = match Text::new("Item name (or part of it):").prompt() {
        Ok(query) => query.trim().to_string(),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let hits = inventory.search_by_name(&query);
    if hits.is_empty() {
        println!("No items found matching `{query}`");
    } else {
        println!("Found {} item(s) matching `{query}`", hits.len());
        render::write_summary(hits, io::stdout().lock())?;
    }
    Ok(())
}

/// Terminal preview of an item's barcode. Encoding failures are reported and
/// the menu continues.
fn show_barcode(item: &Item) {
    match Barcode::encode(&item.barcode) {
        Ok(barcode) => {
            println!("{} ({}) [{}]", item.name.bold(), item.item_id, barcode.symbology());
            if let Err(e) = barcode.render_terminal(&mut io::stdout().lock()) {
                println!("{} {e}", "Error:".red());
            }
        }
        Err(e) => println!("{} {e}", "Error:".red()),
    }
}
