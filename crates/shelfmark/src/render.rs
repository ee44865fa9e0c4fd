//! Shared table and detail formatting used by the subcommands and the
//! interactive menu.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use shelfmark_inventory::Item;

/// One-line-per-item summary table, used by `list` and name search results.
pub fn summary_table<'a>(items: impl IntoIterator<Item = &'a Item>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID", "Name", "Category", "Qty", "Location", "Unit Price",
    ]);

    for item in items {
        table.add_row(vec![
            item.item_id.clone(),
            item.name.clone(),
            item.category.clone(),
            item.quantity.to_string(),
            item.location.clone(),
            format!("${}", item.unit_price),
        ]);
    }
    table
}

pub fn write_summary<'a, W: Write>(
    items: impl IntoIterator<Item = &'a Item>,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "{}", summary_table(items))
}

/// Full key/value listing for a single item, framed like the summary table.
pub fn write_details<W: Write>(item: &Item, mut writer: W) -> io::Result<()> {
    let rows = [
        ("Item ID", item.item_id.clone()),
        ("Name", item.name.clone()),
        ("Category", item.category.clone()),
        ("Quantity", item.quantity.to_string()),
        ("Location", item.location.clone()),
        ("Supplier", item.supplier.clone()),
        ("Unit Price", format!("${}", item.unit_price)),
        ("Barcode", item.barcode.clone()),
        ("Date Added", item.date_added.to_string()),
        (
            "Expiry Date",
            item.expiry_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
    ];

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }

    writeln!(writer, "{table}")
}
