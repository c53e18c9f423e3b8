use super::slice::{fetch, Loads};
use super::{LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{
    CropOffer, CropOfferCreate, DocumentId, Role, TraderCrop, TraderCropCreate, TraderCropUpdate,
};
use std::future::Future;
use tracing::instrument;

const ROLE: Role = Role::Trader;

/// Crops a trader adds to the shared `crops` collection carry this in place
/// of a farmer's name.
pub const TRADER_STOCK: &str = "Trader";

/// The trader's crops and the offers published to manufacturers.
pub struct TraderDashboard {
    owner: String,
    ledger: Ledger,
    loads: Loads,
    crops: Slice<TraderCrop>,
    offers: Slice<CropOffer>,
}

pub struct TraderLoad {
    token: LoadToken,
    crops: Result<Vec<TraderCrop>, Notice>,
    offers: Result<Vec<CropOffer>, Notice>,
}

impl TraderDashboard {
    pub fn new(owner: String, ledger: Ledger) -> Self {
        Self {
            owner,
            ledger,
            loads: Loads::default(),
            crops: Slice::default(),
            offers: Slice::default(),
        }
    }

    pub fn crops(&self) -> &Slice<TraderCrop> {
        &self.crops
    }

    /// The crops flagged for sale.
    pub fn for_sale(&self) -> impl Iterator<Item = &TraderCrop> {
        self.crops.records().iter().filter(|c| c.for_sale)
    }

    pub fn offers(&self) -> &Slice<CropOffer> {
        &self.offers
    }

    pub fn load(&mut self) -> impl Future<Output = TraderLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (crops, offers) = tokio::join!(fetch(ledger.crops), fetch(ledger.crop_offers));
            TraderLoad {
                token,
                crops,
                offers,
            }
        }
    }

    pub fn apply(&mut self, load: TraderLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.crops.apply(load.token, load.crops, &mut notices);
        self.offers.apply(load.token, load.offers, &mut notices);
        notices
    }

    pub async fn hydrate(&mut self) -> Vec<Notice> {
        let load = self.load().await;
        self.apply(load)
    }

    /// Adds stock bought outside the ledger. It is not for sale until flagged.
    #[instrument(skip(self))]
    pub async fn add_crop(
        &mut self,
        crop_name: &str,
        quantity: u32,
        trader_price: f64,
    ) -> Result<DocumentId, Notice> {
        let params = TraderCropCreate {
            farmer_name: TRADER_STOCK.to_string(),
            crop_name: crop_name.to_string(),
            quantity,
            farmer_price: Some(0.0),
            trader_price,
            for_sale: false,
        };
        let id = self.ledger.crops.create(ROLE, params.clone()).await?;
        self.crops.push(TraderCrop {
            id: id.clone(),
            farmer_name: params.farmer_name,
            crop_name: params.crop_name,
            quantity: params.quantity,
            farmer_price: params.farmer_price,
            trader_price: Some(params.trader_price),
            for_sale: params.for_sale,
        });
        self.loads.wrote();
        Ok(id)
    }

    pub async fn set_trader_price(&mut self, id: DocumentId, price: f64) -> Result<(), Notice> {
        self.edit_crop(
            id,
            TraderCropUpdate {
                trader_price: Some(price),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_for_sale(&mut self, id: DocumentId, for_sale: bool) -> Result<(), Notice> {
        self.edit_crop(
            id,
            TraderCropUpdate {
                for_sale: Some(for_sale),
                ..Default::default()
            },
        )
        .await
    }

    /// Overwrites the fields set in `update`; the rest stay as stored.
    pub async fn edit_crop(
        &mut self,
        id: DocumentId,
        update: TraderCropUpdate,
    ) -> Result<(), Notice> {
        let stored = self.ledger.crops.update(ROLE, id, update).await?;
        self.crops.replace(stored);
        self.loads.wrote();
        Ok(())
    }

    /// Publishes the price this trader asks for a crop.
    pub async fn publish_offer(
        &mut self,
        crop_name: &str,
        price: f64,
    ) -> Result<DocumentId, Notice> {
        let params = CropOfferCreate {
            crop_name: crop_name.to_string(),
            price,
            trader_name: self.owner.clone(),
        };
        let id = self.ledger.crop_offers.create(ROLE, params.clone()).await?;
        self.offers.push(CropOffer {
            id: id.clone(),
            crop_name: params.crop_name,
            price: params.price,
            trader_name: params.trader_name,
        });
        self.loads.wrote();
        Ok(id)
    }
}
