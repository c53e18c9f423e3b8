use super::slice::{fetch, Loads};
use super::{LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{
    CropDemandCreate, CropOffer, DocumentId, ProductListing, ProductListingCreate, Role,
};
use std::future::Future;

const ROLE: Role = Role::Manufacturer;

/// Traders' crop offers on one side, the manufacturer's products on the other.
pub struct ManufacturerDashboard {
    owner: String,
    ledger: Ledger,
    loads: Loads,
    crop_offers: Slice<CropOffer>,
    product_listings: Slice<ProductListing>,
}

pub struct ManufacturerLoad {
    token: LoadToken,
    crop_offers: Result<Vec<CropOffer>, Notice>,
    product_listings: Result<Vec<ProductListing>, Notice>,
}

impl ManufacturerDashboard {
    pub fn new(owner: String, ledger: Ledger) -> Self {
        Self {
            owner,
            ledger,
            loads: Loads::default(),
            crop_offers: Slice::default(),
            product_listings: Slice::default(),
        }
    }

    pub fn crop_offers(&self) -> &Slice<CropOffer> {
        &self.crop_offers
    }

    pub fn product_listings(&self) -> &Slice<ProductListing> {
        &self.product_listings
    }

    pub fn load(&mut self) -> impl Future<Output = ManufacturerLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (crop_offers, product_listings) = tokio::join!(
                fetch(ledger.crop_offers),
                fetch(ledger.product_listings)
            );
            ManufacturerLoad {
                token,
                crop_offers,
                product_listings,
            }
        }
    }

    pub fn apply(&mut self, load: ManufacturerLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.crop_offers.apply(load.token, load.crop_offers, &mut notices);
        self.product_listings
            .apply(load.token, load.product_listings, &mut notices);
        notices
    }

    pub async fn hydrate(&mut self) -> Vec<Notice> {
        let load = self.load().await;
        self.apply(load)
    }

    /// Records the price this manufacturer pays a trader for a crop. Farmers
    /// read these demands; they are not shown back here.
    pub async fn set_demand(
        &mut self,
        crop_name: &str,
        price: f64,
        trader_name: &str,
    ) -> Result<DocumentId, Notice> {
        let params = CropDemandCreate {
            crop_name: crop_name.to_string(),
            price,
            trader_name: trader_name.to_string(),
        };
        Ok(self.ledger.trader_prices.create(ROLE, params).await?)
    }

    pub async fn add_product(
        &mut self,
        product_name: &str,
        description: Option<&str>,
        price: f64,
    ) -> Result<DocumentId, Notice> {
        let params = ProductListingCreate {
            product_name: product_name.to_string(),
            description: description.map(str::to_string),
            price,
            manufacturer_name: self.owner.clone(),
        };
        let id = self
            .ledger
            .product_listings
            .create(ROLE, params.clone())
            .await?;
        self.product_listings.push(ProductListing {
            id: id.clone(),
            product_name: params.product_name,
            description: params.description,
            price: params.price,
            manufacturer_name: params.manufacturer_name,
        });
        self.loads.wrote();
        Ok(id)
    }

    /// Offers for one crop, matched by name.
    pub fn offers_for(&self, crop_name: &str) -> Vec<&CropOffer> {
        self.crop_offers
            .records()
            .iter()
            .filter(|o| o.crop_name == crop_name)
            .collect()
    }
}
