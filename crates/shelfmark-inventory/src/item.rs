use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the inventory CSV.
///
/// Field names match the CSV header exactly
/// (`item_id,name,category,quantity,location,supplier,unit_price,barcode,date_added,expiry_date`)
/// so rows deserialize by column name. Records are immutable for the duration
/// of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique key by convention; uniqueness is not enforced by the CSV format.
    pub item_id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub location: String,
    pub supplier: String,
    pub unit_price: Decimal,
    /// Raw barcode value; symbology is chosen from its shape at encode time.
    pub barcode: String,
    pub date_added: NaiveDate,
    /// Empty CSV field deserializes to `None`.
    pub expiry_date: Option<NaiveDate>,
}

impl Item {
    /// Case-insensitive identifier comparison. User-facing lookups uppercase
    /// their input, so ids compare without regard to case.
    pub fn id_matches(&self, id: &str) -> bool {
        self.item_id.eq_ignore_ascii_case(id)
    }
}
