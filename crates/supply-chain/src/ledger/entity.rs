//! [`ActorEntity`] implementations for every collection record.
//!
//! Creation validates the payload in `from_create_params`, so a refused
//! write never reaches the store. Updates validate every supplied field
//! before touching the record.

use super::validation::{non_empty, non_negative_price, positive_price, positive_quantity};
use super::{Collection, LedgerError, QuantityAction, Unsupported};
use crate::model::*;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use paste::paste;

/// A record stored in one of the ledger's collections.
pub trait LedgerRecord: ActorEntity<Id = DocumentId, Context = (), Error = LedgerError> {
    const COLLECTION: Collection;

    fn id(&self) -> &DocumentId;
}

/// A record whose quantity can be drawn down atomically.
pub trait Stocked: LedgerRecord<Action = QuantityAction, ActionResult = u32> {
    fn quantity(&self) -> u32;
}

/// Records that are only ever created: no updates, no actions.
macro_rules! append_only_record {
    ($record:ident in $collection:expr, |$id:ident, $params:ident| $build:block) => {
        paste! {
            #[async_trait]
            impl ActorEntity for $record {
                type Id = DocumentId;
                type Create = [<$record Create>];
                type Update = Unsupported;
                type Action = Unsupported;
                type ActionResult = ();
                type Context = ();
                type Error = LedgerError;

                fn from_create_params(
                    $id: DocumentId,
                    $params: [<$record Create>],
                ) -> Result<Self, LedgerError> $build

                async fn on_update(
                    &mut self,
                    update: Unsupported,
                    _ctx: &(),
                ) -> Result<(), LedgerError> {
                    match update {}
                }

                async fn handle_action(
                    &mut self,
                    action: Unsupported,
                    _ctx: &(),
                ) -> Result<(), LedgerError> {
                    match action {}
                }
            }

            impl LedgerRecord for $record {
                const COLLECTION: Collection = $collection;

                fn id(&self) -> &DocumentId {
                    &self.id
                }
            }
        }
    };
}

// --- Mutable records ---

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = DocumentId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Action = Unsupported;
    type ActionResult = ();
    type Context = ();
    type Error = LedgerError;

    fn from_create_params(id: DocumentId, params: InventoryCreate) -> Result<Self, LedgerError> {
        non_empty("name", &params.name)?;
        positive_quantity("quantity", params.quantity)?;
        positive_price("price", params.price)?;
        Ok(Self {
            id,
            name: params.name,
            quantity: params.quantity,
            price: params.price,
        })
    }

    async fn on_update(&mut self, update: InventoryUpdate, _ctx: &()) -> Result<(), LedgerError> {
        if let Some(price) = update.price {
            non_negative_price("price", price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Unsupported, _ctx: &()) -> Result<(), LedgerError> {
        match action {}
    }
}

impl LedgerRecord for InventoryItem {
    const COLLECTION: Collection = Collection::Inventory;

    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[async_trait]
impl ActorEntity for CropForSale {
    type Id = DocumentId;
    type Create = CropForSaleCreate;
    type Update = CropForSaleUpdate;
    type Action = QuantityAction;
    type ActionResult = u32;
    type Context = ();
    type Error = LedgerError;

    fn from_create_params(id: DocumentId, params: CropForSaleCreate) -> Result<Self, LedgerError> {
        non_empty("name", &params.name)?;
        positive_quantity("quantity", params.quantity)?;
        positive_price("price", params.price)?;
        Ok(Self {
            id,
            name: params.name,
            quantity: params.quantity,
            price: params.price,
            farmer_name: params.farmer_name,
        })
    }

    async fn on_update(&mut self, update: CropForSaleUpdate, _ctx: &()) -> Result<(), LedgerError> {
        if let Some(price) = update.price {
            non_negative_price("price", price)?;
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: QuantityAction,
        _ctx: &(),
    ) -> Result<u32, LedgerError> {
        action.apply(&self.id, &mut self.quantity)
    }
}

impl LedgerRecord for CropForSale {
    const COLLECTION: Collection = Collection::CropsForSale;

    fn id(&self) -> &DocumentId {
        &self.id
    }
}

impl Stocked for CropForSale {
    fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[async_trait]
impl ActorEntity for TraderCrop {
    type Id = DocumentId;
    type Create = TraderCropCreate;
    type Update = TraderCropUpdate;
    type Action = Unsupported;
    type ActionResult = ();
    type Context = ();
    type Error = LedgerError;

    fn from_create_params(id: DocumentId, params: TraderCropCreate) -> Result<Self, LedgerError> {
        non_empty("cropName", &params.crop_name)?;
        positive_quantity("quantity", params.quantity)?;
        positive_price("traderPrice", params.trader_price)?;
        if let Some(price) = params.farmer_price {
            non_negative_price("farmerPrice", price)?;
        }
        Ok(Self {
            id,
            farmer_name: params.farmer_name,
            crop_name: params.crop_name,
            quantity: params.quantity,
            farmer_price: params.farmer_price,
            trader_price: Some(params.trader_price),
            for_sale: params.for_sale,
        })
    }

    async fn on_update(&mut self, update: TraderCropUpdate, _ctx: &()) -> Result<(), LedgerError> {
        if let Some(name) = &update.crop_name {
            non_empty("cropName", name)?;
        }
        if let Some(price) = update.trader_price {
            non_negative_price("traderPrice", price)?;
        }

        if let Some(name) = update.crop_name {
            self.crop_name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.trader_price {
            self.trader_price = Some(price);
        }
        if let Some(for_sale) = update.for_sale {
            self.for_sale = for_sale;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Unsupported, _ctx: &()) -> Result<(), LedgerError> {
        match action {}
    }
}

impl LedgerRecord for TraderCrop {
    const COLLECTION: Collection = Collection::Crops;

    fn id(&self) -> &DocumentId {
        &self.id
    }
}

// --- Append-only records ---

append_only_record!(CropDemand in Collection::TraderPrices, |id, params| {
    non_empty("cropName", &params.crop_name)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        crop_name: params.crop_name,
        price: params.price,
        trader_name: params.trader_name,
    })
});

append_only_record!(CropOffer in Collection::CropOffers, |id, params| {
    non_empty("cropName", &params.crop_name)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        crop_name: params.crop_name,
        price: params.price,
        trader_name: params.trader_name,
    })
});

append_only_record!(ProductListing in Collection::ProductListings, |id, params| {
    non_empty("productName", &params.product_name)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        product_name: params.product_name,
        description: params.description,
        price: params.price,
        manufacturer_name: params.manufacturer_name,
    })
});

append_only_record!(DistributorProduct in Collection::DistributorProducts, |id, params| {
    non_empty("productName", &params.product_name)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        product_name: params.product_name,
        description: params.description,
        price: params.price,
        distributor_name: params.distributor_name,
    })
});

append_only_record!(ShopProduct in Collection::ShopProducts, |id, params| {
    non_empty("productName", &params.product_name)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        product_name: params.product_name,
        description: params.description,
        price: params.price,
        distributor_name: params.distributor_name,
    })
});

append_only_record!(Order in Collection::Orders, |id, params| {
    non_empty("name", &params.name)?;
    positive_quantity("quantity", params.quantity)?;
    positive_price("price", params.price)?;
    Ok(Self {
        id,
        name: params.name,
        quantity: params.quantity,
        price: params.price,
    })
});

// --- Profiles ---

/// Profiles are only ever stored with `put` under their identity id, and the
/// role they carry never changes.
#[async_trait]
impl ActorEntity for Profile {
    type Id = DocumentId;
    type Create = Unsupported;
    type Update = Unsupported;
    type Action = Unsupported;
    type ActionResult = ();
    type Context = ();
    type Error = LedgerError;

    fn from_create_params(_id: DocumentId, params: Unsupported) -> Result<Self, LedgerError> {
        match params {}
    }

    async fn on_update(&mut self, update: Unsupported, _ctx: &()) -> Result<(), LedgerError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Unsupported, _ctx: &()) -> Result<(), LedgerError> {
        match action {}
    }
}

impl LedgerRecord for Profile {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &DocumentId {
        &self.id
    }
}
