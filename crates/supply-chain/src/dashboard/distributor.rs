use super::slice::{fetch, Loads};
use super::{stock, LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{
    DistributorProduct, DistributorProductCreate, DocumentId, InventoryCreate, InventoryItem,
    Order, ProductListing, Role,
};
use std::future::Future;
use tracing::instrument;

const ROLE: Role = Role::Distributor;

/// Stock, incoming orders, manufacturers' listings to source from, and the
/// products this distributor supplies to shops.
pub struct DistributorDashboard {
    owner: String,
    ledger: Ledger,
    loads: Loads,
    inventory: Slice<InventoryItem>,
    orders: Slice<Order>,
    product_listings: Slice<ProductListing>,
    supplied: Slice<DistributorProduct>,
}

pub struct DistributorLoad {
    token: LoadToken,
    inventory: Result<Vec<InventoryItem>, Notice>,
    orders: Result<Vec<Order>, Notice>,
    product_listings: Result<Vec<ProductListing>, Notice>,
    supplied: Result<Vec<DistributorProduct>, Notice>,
}

impl DistributorDashboard {
    pub fn new(owner: String, ledger: Ledger) -> Self {
        Self {
            owner,
            ledger,
            loads: Loads::default(),
            inventory: Slice::default(),
            orders: Slice::default(),
            product_listings: Slice::default(),
            supplied: Slice::default(),
        }
    }

    pub fn inventory(&self) -> &Slice<InventoryItem> {
        &self.inventory
    }

    pub fn orders(&self) -> &Slice<Order> {
        &self.orders
    }

    pub fn product_listings(&self) -> &Slice<ProductListing> {
        &self.product_listings
    }

    pub fn supplied(&self) -> &Slice<DistributorProduct> {
        &self.supplied
    }

    pub fn load(&mut self) -> impl Future<Output = DistributorLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (inventory, orders, product_listings, supplied) = tokio::join!(
                fetch(ledger.inventory),
                fetch(ledger.orders),
                fetch(ledger.product_listings),
                fetch(ledger.distributor_products),
            );
            DistributorLoad {
                token,
                inventory,
                orders,
                product_listings,
                supplied,
            }
        }
    }

    pub fn apply(&mut self, load: DistributorLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.inventory.apply(load.token, load.inventory, &mut notices);
        self.orders.apply(load.token, load.orders, &mut notices);
        self.product_listings
            .apply(load.token, load.product_listings, &mut notices);
        self.supplied.apply(load.token, load.supplied, &mut notices);
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

    /// Offers a manufacturer's product to shops at this distributor's price.
    #[instrument(skip(self))]
    pub async fn supply(&mut self, listing: DocumentId, price: f64) -> Result<DocumentId, Notice> {
        let source = self
            .product_listings
            .get(&listing)
            .ok_or_else(|| Notice::Failed(format!("Record not found: {listing}")))?;
        let params = DistributorProductCreate {
            product_name: source.product_name.clone(),
            description: source.description.clone(),
            price,
            distributor_name: self.owner.clone(),
        };
        let id = self
            .ledger
            .distributor_products
            .create(ROLE, params.clone())
            .await?;
        self.supplied.push(DistributorProduct {
            id: id.clone(),
            product_name: params.product_name,
            description: params.description,
            price: params.price,
            distributor_name: params.distributor_name,
        });
        self.loads.wrote();
        Ok(id)
    }
}
