use super::LedgerClient;
use crate::model::{
    CropDemand, CropForSale, CropOffer, DistributorProduct, InventoryItem, Order, ProductListing,
    ShopProduct, TraderCrop,
};

/// One client per shared collection. Cheap to clone; dashboards hold a copy.
#[derive(Clone)]
pub struct Ledger {
    pub inventory: LedgerClient<InventoryItem>,
    pub crops_for_sale: LedgerClient<CropForSale>,
    pub crops: LedgerClient<TraderCrop>,
    pub trader_prices: LedgerClient<CropDemand>,
    pub crop_offers: LedgerClient<CropOffer>,
    pub product_listings: LedgerClient<ProductListing>,
    pub distributor_products: LedgerClient<DistributorProduct>,
    pub shop_products: LedgerClient<ShopProduct>,
    pub orders: LedgerClient<Order>,
}
