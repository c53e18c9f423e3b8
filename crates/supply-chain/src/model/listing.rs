use super::DocumentId;
use serde::{Deserialize, Serialize};

/// A manufactured product (`productListings`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    #[serde(skip)]
    pub id: DocumentId,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub manufacturer_name: String,
}

#[derive(Debug, Clone)]
pub struct ProductListingCreate {
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub manufacturer_name: String,
}

/// A product a distributor supplies to shops (`distributorProducts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributorProduct {
    #[serde(skip)]
    pub id: DocumentId,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub distributor_name: String,
}

#[derive(Debug, Clone)]
pub struct DistributorProductCreate {
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub distributor_name: String,
}

/// A product on a shop's shelf (`shopProducts`), carrying the distributor it
/// was sourced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProduct {
    #[serde(skip)]
    pub id: DocumentId,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub distributor_name: String,
}

#[derive(Debug, Clone)]
pub struct ShopProductCreate {
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub distributor_name: String,
}
