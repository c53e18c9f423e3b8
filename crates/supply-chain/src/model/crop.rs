use super::DocumentId;
use serde::{Deserialize, Serialize};

/// A farmer's crop offered for sale (`cropsForSale`).
///
/// Quantity only goes down, through the sell path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropForSale {
    #[serde(skip)]
    pub id: DocumentId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CropForSaleCreate {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub farmer_name: Option<String>,
}

impl CropForSaleCreate {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            farmer_name: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CropForSaleUpdate {
    pub price: Option<f64>,
}

/// A crop held by a trader (`crops`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderCrop {
    #[serde(skip)]
    pub id: DocumentId,
    pub farmer_name: String,
    pub crop_name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_price: Option<f64>,
    #[serde(default)]
    pub for_sale: bool,
}

#[derive(Debug, Clone)]
pub struct TraderCropCreate {
    pub farmer_name: String,
    pub crop_name: String,
    pub quantity: u32,
    pub farmer_price: Option<f64>,
    pub trader_price: f64,
    pub for_sale: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TraderCropUpdate {
    pub crop_name: Option<String>,
    pub quantity: Option<u32>,
    pub trader_price: Option<f64>,
    pub for_sale: Option<bool>,
}
