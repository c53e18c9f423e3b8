use super::slice::{fetch, Loads};
use super::{stock, LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{
    DistributorProduct, DocumentId, InventoryCreate, InventoryItem, Role, ShopProduct,
    ShopProductCreate,
};
use std::future::Future;
use tracing::instrument;

const ROLE: Role = Role::Shops;

/// Stock, what distributors supply, and what is on the shelves.
pub struct ShopsDashboard {
    ledger: Ledger,
    loads: Loads,
    inventory: Slice<InventoryItem>,
    distributor_products: Slice<DistributorProduct>,
    shelf: Slice<ShopProduct>,
}

pub struct ShopsLoad {
    token: LoadToken,
    inventory: Result<Vec<InventoryItem>, Notice>,
    distributor_products: Result<Vec<DistributorProduct>, Notice>,
    shelf: Result<Vec<ShopProduct>, Notice>,
}

impl ShopsDashboard {
    /// Shop products carry their distributor's name, not the shop's.
    pub fn new(_owner: String, ledger: Ledger) -> Self {
        Self {
            ledger,
            loads: Loads::default(),
            inventory: Slice::default(),
            distributor_products: Slice::default(),
            shelf: Slice::default(),
        }
    }

    pub fn inventory(&self) -> &Slice<InventoryItem> {
        &self.inventory
    }

    pub fn distributor_products(&self) -> &Slice<DistributorProduct> {
        &self.distributor_products
    }

    pub fn shelf(&self) -> &Slice<ShopProduct> {
        &self.shelf
    }

    pub fn load(&mut self) -> impl Future<Output = ShopsLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (inventory, distributor_products, shelf) = tokio::join!(
                fetch(ledger.inventory),
                fetch(ledger.distributor_products),
                fetch(ledger.shop_products),
            );
            ShopsLoad {
                token,
                inventory,
                distributor_products,
                shelf,
            }
        }
    }

    pub fn apply(&mut self, load: ShopsLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.inventory.apply(load.token, load.inventory, &mut notices);
        self.distributor_products
            .apply(load.token, load.distributor_products, &mut notices);
        self.shelf.apply(load.token, load.shelf, &mut notices);
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

    /// Puts a distributor's product on the shelf at the shop's price.
    #[instrument(skip(self))]
    pub async fn stock_product(
        &mut self,
        source: DocumentId,
        price: f64,
    ) -> Result<DocumentId, Notice> {
        let product = self
            .distributor_products
            .get(&source)
            .ok_or_else(|| Notice::Failed(format!("Record not found: {source}")))?;
        let params = ShopProductCreate {
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            price,
            distributor_name: product.distributor_name.clone(),
        };
        let id = self.ledger.shop_products.create(ROLE, params.clone()).await?;
        self.shelf.push(ShopProduct {
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
