use crate::model::Role;
use std::fmt::Display;

/// The named collections of the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Inventory,
    CropsForSale,
    Crops,
    TraderPrices,
    CropOffers,
    ProductListings,
    DistributorProducts,
    ShopProducts,
    Orders,
}

impl Collection {
    pub const ALL: [Collection; 10] = [
        Collection::Users,
        Collection::Inventory,
        Collection::CropsForSale,
        Collection::Crops,
        Collection::TraderPrices,
        Collection::CropOffers,
        Collection::ProductListings,
        Collection::DistributorProducts,
        Collection::ShopProducts,
        Collection::Orders,
    ];

    /// Collection name as stored.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Inventory => "inventory",
            Collection::CropsForSale => "cropsForSale",
            Collection::Crops => "crops",
            Collection::TraderPrices => "traderPrices",
            Collection::CropOffers => "cropOffers",
            Collection::ProductListings => "productListings",
            Collection::DistributorProducts => "distributorProducts",
            Collection::ShopProducts => "shopProducts",
            Collection::Orders => "orders",
        }
    }

    /// Roles allowed to create or modify records here. Reads are open to all.
    ///
    /// `users` has no writers: profiles are only written by the sign-up path.
    pub fn writers(&self) -> &'static [Role] {
        match self {
            Collection::Users => &[],
            Collection::Inventory => &[Role::Farmer, Role::Distributor, Role::Shops],
            Collection::CropsForSale => &[Role::Farmer],
            Collection::Crops => &[Role::Trader],
            Collection::TraderPrices => &[Role::Manufacturer],
            Collection::CropOffers => &[Role::Trader],
            Collection::ProductListings => &[Role::Manufacturer],
            Collection::DistributorProducts => &[Role::Distributor],
            Collection::ShopProducts => &[Role::Shops],
            Collection::Orders => &[Role::User],
        }
    }

    pub fn permits_write(&self, role: Role) -> bool {
        self.writers().contains(&role)
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
