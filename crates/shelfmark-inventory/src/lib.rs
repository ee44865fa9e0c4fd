//! Inventory record model and CSV loader.
//!
//! The inventory is a flat, ordered list of [`Item`] records loaded once from
//! a CSV file and read-only afterwards. Lookups are linear scans; there is no
//! index and none is needed at the scale this tool targets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod item;

pub use item::Item;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("failed to open inventory file `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A malformed row aborts the load; the csv crate's error message carries
    /// the offending line number.
    #[error("malformed inventory row: {0}")]
    Row(#[from] csv::Error),
}

/// The full record set, in CSV load order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Load all records from `path`, aborting on the first malformed row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|source| InventoryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut items = Vec::new();
        for record in reader.deserialize::<Item>() {
            items.push(record?);
        }
        log::info!("loaded {} items from {}", items.len(), path.display());

        let inventory = Self { items };
        inventory.warn_duplicate_ids();
        Ok(inventory)
    }

    /// Build an inventory from records already in memory.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The source format does not enforce id uniqueness; surface duplicates
    /// so the operator can fix the file. Lookups return the first match.
    fn warn_duplicate_ids(&self) {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.item_id.to_ascii_uppercase()) {
                log::warn!("duplicate item id `{}` in inventory file", item.item_id);
            }
        }
    }

    /// Exact identifier match, case-insensitive. First match or none.
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id_matches(id))
    }

    /// Case-insensitive substring match on the item name, in load order.
    /// An empty query matches every record.
    pub fn search_by_name(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
