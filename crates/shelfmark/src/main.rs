use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use shelfmark_inventory::Inventory;

mod barcode;
mod info;
mod interactive;
mod list;
mod print;
mod render;
mod search;

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(about = "Warehouse inventory and barcode management", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Inventory CSV file
    #[arg(
        long = "csv",
        global = true,
        value_name = "FILE",
        default_value = "items.csv"
    )]
    csv: PathBuf,

    /// Directory for generated barcode images
    #[arg(
        long = "out-dir",
        global = true,
        value_name = "DIR",
        default_value = "barcodes"
    )]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all inventory items
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Search items by name
    #[command(alias = "s")]
    Search(search::SearchArgs),

    /// Show full details for an item
    #[command(alias = "i")]
    Info(info::InfoArgs),

    /// Render an item's barcode in the terminal or as a PNG
    #[command(alias = "b")]
    Barcode(barcode::BarcodeArgs),

    /// Generate an item's barcode image and show print instructions
    Print(print::PrintArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG overrides either way
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    log::debug!(
        "inventory file: {}, barcode output: {}",
        cli.csv.display(),
        cli.out_dir.display()
    );

    let inventory = Inventory::load(&cli.csv)?;

    match cli.command {
        Some(Commands::List(args)) => list::execute(args, &inventory),
        Some(Commands::Search(args)) => search::execute(args, &inventory),
        Some(Commands::Info(args)) => info::execute(args, &inventory),
        Some(Commands::Barcode(args)) => barcode::execute(args, &inventory, &cli.out_dir),
        Some(Commands::Print(args)) => print::execute(args, &inventory, &cli.out_dir),
        None => interactive::run(&inventory, &cli.out_dir),
    }
}
