//! Inventory editing shared by the roles that keep stock (Farmer,
//! Distributor, Shops). Inventory is one collection for all of them.

use super::{Notice, Slice};
use crate::clients::LedgerClient;
use crate::model::{DocumentId, InventoryCreate, InventoryItem, InventoryUpdate, Role};

pub(crate) async fn add_item(
    client: &LedgerClient<InventoryItem>,
    role: Role,
    slice: &mut Slice<InventoryItem>,
    item: InventoryCreate,
) -> Result<DocumentId, Notice> {
    let id = client.create(role, item.clone()).await?;
    slice.push(InventoryItem {
        id: id.clone(),
        name: item.name,
        quantity: item.quantity,
        price: item.price,
    });
    Ok(id)
}

pub(crate) async fn update_item(
    client: &LedgerClient<InventoryItem>,
    role: Role,
    slice: &mut Slice<InventoryItem>,
    id: DocumentId,
    quantity: u32,
    price: f64,
) -> Result<(), Notice> {
    let update = InventoryUpdate {
        quantity: Some(quantity),
        price: Some(price),
    };
    let stored = client.update(role, id, update).await?;
    slice.replace(stored);
    Ok(())
}
