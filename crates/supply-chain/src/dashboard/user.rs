use super::slice::{fetch, Loads};
use super::{LoadToken, Notice, Slice};
use crate::clients::Ledger;
use crate::model::{DocumentId, Order, OrderCreate, Role, ShopProduct};
use std::future::Future;
use tracing::instrument;

const ROLE: Role = Role::User;

/// Shop shelves and the orders placed from them.
pub struct UserDashboard {
    ledger: Ledger,
    loads: Loads,
    shop_products: Slice<ShopProduct>,
    orders: Slice<Order>,
}

pub struct UserLoad {
    token: LoadToken,
    shop_products: Result<Vec<ShopProduct>, Notice>,
    orders: Result<Vec<Order>, Notice>,
}

impl UserDashboard {
    pub fn new(_owner: String, ledger: Ledger) -> Self {
        Self {
            ledger,
            loads: Loads::default(),
            shop_products: Slice::default(),
            orders: Slice::default(),
        }
    }

    pub fn shop_products(&self) -> &Slice<ShopProduct> {
        &self.shop_products
    }

    pub fn orders(&self) -> &Slice<Order> {
        &self.orders
    }

    pub fn load(&mut self) -> impl Future<Output = UserLoad> + Send + 'static {
        let token = self.loads.issue();
        let ledger = self.ledger.clone();
        async move {
            let (shop_products, orders) =
                tokio::join!(fetch(ledger.shop_products), fetch(ledger.orders));
            UserLoad {
                token,
                shop_products,
                orders,
            }
        }
    }

    pub fn apply(&mut self, load: UserLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        if !self.loads.accept(load.token) {
            return notices;
        }
        self.shop_products
            .apply(load.token, load.shop_products, &mut notices);
        self.orders.apply(load.token, load.orders, &mut notices);
        notices
    }

    pub async fn hydrate(&mut self) -> Vec<Notice> {
        let load = self.load().await;
        self.apply(load)
    }

    /// Orders `quantity` units of a shelf product at its listed price.
    #[instrument(skip(self))]
    pub async fn place_order(
        &mut self,
        product: DocumentId,
        quantity: u32,
    ) -> Result<DocumentId, Notice> {
        let listed = self
            .shop_products
            .get(&product)
            .ok_or_else(|| Notice::Failed(format!("Record not found: {product}")))?;
        let params = OrderCreate {
            name: listed.product_name.clone(),
            quantity,
            price: listed.price,
        };
        let id = self.ledger.orders.create(ROLE, params.clone()).await?;
        self.orders.push(Order {
            id: id.clone(),
            name: params.name,
            quantity: params.quantity,
            price: params.price,
        });
        self.loads.wrote();
        Ok(id)
    }
}
