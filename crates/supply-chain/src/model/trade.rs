use super::DocumentId;
use serde::{Deserialize, Serialize};

/// Price a manufacturer will pay for a trader's crop (`traderPrices`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDemand {
    #[serde(skip)]
    pub id: DocumentId,
    pub crop_name: String,
    pub price: f64,
    pub trader_name: String,
}

#[derive(Debug, Clone)]
pub struct CropDemandCreate {
    pub crop_name: String,
    pub price: f64,
    pub trader_name: String,
}

/// Price a trader asks for a crop (`cropOffers`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropOffer {
    #[serde(skip)]
    pub id: DocumentId,
    pub crop_name: String,
    pub price: f64,
    pub trader_name: String,
}

#[derive(Debug, Clone)]
pub struct CropOfferCreate {
    pub crop_name: String,
    pub price: f64,
    pub trader_name: String,
}
