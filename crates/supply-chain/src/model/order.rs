use super::DocumentId;
use serde::{Deserialize, Serialize};

/// An order placed by a user (`orders`). Same shape as an inventory line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip)]
    pub id: DocumentId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}
