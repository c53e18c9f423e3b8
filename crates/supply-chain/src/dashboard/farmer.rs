use super::slice::{fetch, Loads};
use super::{stock, LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{
    CropDemand, CropForSale, CropForSaleCreate, CropForSaleUpdate, DocumentId, InventoryCreate,
    InventoryItem, Role,
};
use std::future::Future;
use tracing::instrument;

const ROLE: Role = Role::Farmer;

/// Inventory, crops offered for sale, and what manufacturers will pay.
pub struct FarmerDashboard {
    owner: String,
    ledger: Ledger,
    loads: Loads,
    inventory: Slice<InventoryItem>,
    crops_for_sale: Slice<CropForSale>,
    trader_prices: Slice<CropDemand>,
}

pub struct FarmerLoad {
    token: LoadToken,
    inventory: Result<Vec<InventoryItem>, Notice>,
    crops_for_sale: Result<Vec<CropForSale>, Notice>,
    trader_prices: Result<Vec<CropDemand>, Notice>,
}

impl FarmerDashboard {
    pub fn new(owner: String, ledger: Ledger) -> Self {
        Self {
            owner,
            ledger,
            loads: Loads::default(),
            inventory: Slice::default(),
            crops_for_sale: Slice::default(),
            trader_prices: Slice::default(),
        }
    }

    pub fn inventory(&self) -> &Slice<InventoryItem> {
        &self.inventory
    }

    pub fn crops_for_sale(&self) -> &Slice<CropForSale> {
        &self.crops_for_sale
    }

    pub fn trader_prices(&self) -> &Slice<CropDemand> {
        &self.trader_prices
    }

    /// Starts a load. The returned future borrows nothing from `self`.
    pub fn load(&mut self) -> impl Future<Output = FarmerLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (inventory, crops_for_sale, trader_prices) = tokio::join!(
                fetch(ledger.inventory),
                fetch(ledger.crops_for_sale),
                fetch(ledger.trader_prices),
            );
            FarmerLoad {
                token,
                inventory,
                crops_for_sale,
                trader_prices,
            }
        }
    }

    /// Applies a finished load unless a newer load or a local write came after it.
    pub fn apply(&mut self, load: FarmerLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.inventory.apply(load.token, load.inventory, &mut notices);
        self.crops_for_sale.apply(load.token, load.crops_for_sale, &mut notices);
        self.trader_prices.apply(load.token, load.trader_prices, &mut notices);
        notices
    }

    pub async fn hydrate(&mut self) -> Vec<Notice> {
        let load = self.load().await;
        self.apply(load)
    }

    pub async fn add_inventory(&mut self, item: InventoryCreate) -> Result<DocumentId, Notice> {
        let id = stock::add_item(&self.ledger.inventory, ROLE, &mut self.inventory, item).await?;
        self.loads.wrote();
        Ok(id)
    }

    pub async fn update_inventory(
        &mut self,
        id: DocumentId,
        quantity: u32,
        price: f64,
    ) -> Result<(), Notice> {
        stock::update_item(&self.ledger.inventory, ROLE, &mut self.inventory, id, quantity, price)
            .await?;
        self.loads.wrote();
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_crop_for_sale(
        &mut self,
        name: &str,
        quantity: u32,
        price: f64,
    ) -> Result<DocumentId, Notice> {
        let params = CropForSaleCreate {
            farmer_name: Some(self.owner.clone()).filter(|n| !n.is_empty()),
            ..CropForSaleCreate::new(name, quantity, price)
        };
        let id = self.ledger.crops_for_sale.create(ROLE, params.clone()).await?;
        self.crops_for_sale.push(CropForSale {
            id: id.clone(),
            name: params.name,
            quantity: params.quantity,
            price: params.price,
            farmer_name: params.farmer_name,
        });
        self.loads.wrote();
        Ok(id)
    }

    pub async fn update_crop_price(&mut self, id: DocumentId, price: f64) -> Result<(), Notice> {
        let update = CropForSaleUpdate { price: Some(price) };
        let stored = self.ledger.crops_for_sale.update(ROLE, id, update).await?;
        self.crops_for_sale.replace(stored);
        self.loads.wrote();
        Ok(())
    }

    /// Sells `amount` from a crop and returns the quantity left. Asking for
    /// more than is stocked gives [`Notice::Alert`] and changes nothing.
    #[instrument(skip(self))]
    pub async fn sell_crop(&mut self, id: DocumentId, amount: u32) -> Result<u32, Notice> {
        let left = self
            .ledger
            .crops_for_sale
            .decrement_quantity(ROLE, id.clone(), amount)
            .await?;
        self.crops_for_sale.modify(&id, |crop| crop.quantity = left);
        self.loads.wrote();
        Ok(left)
    }
}
