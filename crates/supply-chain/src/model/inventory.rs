use super::DocumentId;
use serde::{Deserialize, Serialize};

/// A stock line in the shared `inventory` collection.
///
/// Inventory is not scoped by owner: every role that may write it sees and
/// edits the same records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(skip)]
    pub id: DocumentId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl InventoryCreate {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Partial update; `None` leaves the field as stored.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}
