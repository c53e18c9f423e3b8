use supply_chain::auth::Identity;
use supply_chain::config::Config;
use supply_chain::dashboard::{
    Dashboard, DistributorDashboard, FarmerDashboard, ManufacturerDashboard, Notice, Opened,
    ShopsDashboard, TraderDashboard, UserDashboard,
};
use supply_chain::lifecycle::SupplyChainSystem;
use supply_chain::model::{InventoryCreate, Role, TraderCropUpdate};
use supply_chain::routing::DashboardId;
use supply_chain::session::SessionSnapshot;

fn session(role: Option<&str>) -> SessionSnapshot {
    SessionSnapshot::signed_in(
        Identity {
            uid: "uid-1".into(),
            email: "someone@farm.test".into(),
        },
        Some("Asha".into()),
        role.map(String::from),
    )
}

#[tokio::test]
async fn test_open_uses_the_role_resolver() {
    let system = SupplyChainSystem::start(&Config::default());

    for role in Role::ALL {
        match Dashboard::open(&session(Some(role.as_str())), &system.ledger) {
            Opened::Ready(dashboard) => assert_eq!(
                dashboard.id().path(),
                format!("/{}", role.as_str().to_lowercase())
            ),
            _ => panic!("{role} did not open a dashboard"),
        }
    }
    assert!(matches!(
        Dashboard::open(&session(Some("Broker")), &system.ledger),
        Opened::UnknownRole
    ));
    assert!(matches!(
        Dashboard::open(&session(None), &system.ledger),
        Opened::Loading
    ));
    assert!(matches!(
        Dashboard::open(&SessionSnapshot::pending(), &system.ledger),
        Opened::Loading
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_farmer_sell_flow_updates_its_own_cache() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut farmer = FarmerDashboard::new("Asha".into(), system.ledger.clone());
    assert!(farmer.hydrate().await.is_empty());

    let corn = farmer.add_crop_for_sale("Corn", 10, 5.0).await.unwrap();
    assert_eq!(
        farmer.crops_for_sale().get(&corn).unwrap().farmer_name.as_deref(),
        Some("Asha")
    );

    let alert = farmer.sell_crop(corn.clone(), 15).await.unwrap_err();
    assert_eq!(alert, Notice::Alert("Not enough quantity available.".into()));
    assert_eq!(farmer.crops_for_sale().get(&corn).unwrap().quantity, 10);

    assert_eq!(farmer.sell_crop(corn.clone(), 4).await, Ok(6));
    assert_eq!(farmer.crops_for_sale().get(&corn).unwrap().quantity, 6);

    let refused = farmer
        .add_inventory(InventoryCreate::new("", 1, 1.0))
        .await
        .unwrap_err();
    assert!(matches!(refused, Notice::Refused(_)));
    assert!(farmer.inventory().is_empty());

    let wheat = farmer
        .add_inventory(InventoryCreate::new("Wheat", 50, 12.5))
        .await
        .unwrap();
    farmer.update_inventory(wheat.clone(), 45, 13.0).await.unwrap();
    let item = farmer.inventory().get(&wheat).unwrap();
    assert_eq!((item.quantity, item.price), (45, 13.0));

    drop(farmer);
    system.shutdown().await.unwrap();
}

/// Writes from one dashboard are not pushed to another until it reloads.
#[tokio::test]
async fn test_dashboards_diverge_until_reload() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut manufacturer = ManufacturerDashboard::new("Mill Co".into(), system.ledger.clone());
    let mut farmer = FarmerDashboard::new("Asha".into(), system.ledger.clone());
    farmer.hydrate().await;

    manufacturer.set_demand("Corn", 7.5, "Ravi").await.unwrap();
    assert!(farmer.trader_prices().is_empty());

    let before = farmer.trader_prices().token();
    farmer.hydrate().await;
    assert_eq!(farmer.trader_prices().len(), 1);
    assert!(farmer.trader_prices().token() > before);
    assert_eq!(farmer.trader_prices().records()[0].trader_name, "Ravi");

    drop((farmer, manufacturer));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut trader = TraderDashboard::new("Ravi".into(), system.ledger.clone());

    let older = trader.load().await;
    let rice = trader.add_crop("Rice", 8, 20.0).await.unwrap();
    let newer = trader.load().await;

    assert!(trader.apply(newer).is_empty());
    assert_eq!(trader.crops().len(), 1);
    // The older load saw an empty collection; applying it would lose the crop.
    assert!(trader.apply(older).is_empty());
    assert_eq!(trader.crops().len(), 1);
    assert!(trader.crops().get(&rice).is_some());

    drop(trader);
    system.shutdown().await.unwrap();
}

/// A load that read the collection before a write must not wipe the write
/// from the cache, even when no newer load has been applied.
#[tokio::test]
async fn test_load_issued_before_a_create_keeps_the_created_record() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut trader = TraderDashboard::new("Ravi".into(), system.ledger.clone());

    let in_flight = trader.load().await;
    let rice = trader.add_crop("Rice", 8, 20.0).await.unwrap();

    assert!(trader.apply(in_flight).is_empty());
    assert_eq!(trader.crops().len(), 1);
    assert!(trader.crops().get(&rice).is_some());

    // A load issued after the write is taken and agrees with the cache.
    assert!(trader.hydrate().await.is_empty());
    assert_eq!(trader.crops().get(&rice).unwrap().quantity, 8);

    drop(trader);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_load_issued_before_a_sale_keeps_the_sold_quantity() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut farmer = FarmerDashboard::new("Asha".into(), system.ledger.clone());
    let corn = farmer.add_crop_for_sale("Corn", 10, 5.0).await.unwrap();

    let in_flight = farmer.load().await;
    assert_eq!(farmer.sell_crop(corn.clone(), 4).await, Ok(6));
    farmer.apply(in_flight);
    assert_eq!(farmer.crops_for_sale().get(&corn).unwrap().quantity, 6);

    farmer.hydrate().await;
    assert_eq!(farmer.crops_for_sale().get(&corn).unwrap().quantity, 6);

    drop(farmer);
    system.shutdown().await.unwrap();
}

/// A load whose view went away is never applied and leaves nothing behind.
#[tokio::test]
async fn test_abandoned_load_is_harmless() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut user = UserDashboard::new("Kim".into(), system.ledger.clone());

    let pending = tokio::spawn(user.load());
    pending.abort();
    let _ = pending.await;
    drop(user);

    let mut user = UserDashboard::new("Kim".into(), system.ledger.clone());
    assert!(user.hydrate().await.is_empty());
    assert!(user.orders().is_empty());

    drop(user);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_trader_crops_and_offers() {
    let system = SupplyChainSystem::start(&Config::default());
    let mut trader = TraderDashboard::new("Ravi".into(), system.ledger.clone());
    trader.hydrate().await;

    let rice = trader.add_crop("Rice", 8, 20.0).await.unwrap();
    let stored = trader.crops().get(&rice).unwrap();
    assert_eq!(stored.farmer_name, "Trader");
    assert_eq!(trader.for_sale().count(), 0);

    trader.set_for_sale(rice.clone(), true).await.unwrap();
    trader.set_trader_price(rice.clone(), 22.0).await.unwrap();
    trader
        .edit_crop(
            rice.clone(),
            TraderCropUpdate {
                crop_name: Some("Basmati".into()),
                quantity: Some(6),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let crop = trader.crops().get(&rice).unwrap();
    assert_eq!(crop.crop_name, "Basmati");
    assert_eq!(crop.quantity, 6);
    assert_eq!(crop.trader_price, Some(22.0));
    assert_eq!(trader.for_sale().count(), 1);

    trader.publish_offer("Basmati", 25.0).await.unwrap();
    let mut manufacturer = ManufacturerDashboard::new("Mill Co".into(), system.ledger.clone());
    manufacturer.hydrate().await;
    assert_eq!(manufacturer.offers_for("Basmati").len(), 1);
    assert_eq!(manufacturer.offers_for("Basmati")[0].trader_name, "Ravi");

    drop((trader, manufacturer));
    system.shutdown().await.unwrap();
}

/// Manufacturer lists, distributor supplies, shop stocks, user orders,
/// distributor sees the order.
#[tokio::test]
async fn test_product_flows_down_the_chain() {
    let system = SupplyChainSystem::start(&Config::default());
    let ledger = system.ledger.clone();

    let mut manufacturer = ManufacturerDashboard::new("Mill Co".into(), ledger.clone());
    let flour = manufacturer
        .add_product("Flour", Some("Stone-ground"), 3.0)
        .await
        .unwrap();
    assert!(manufacturer.product_listings().get(&flour).is_some());

    let mut distributor = DistributorDashboard::new("Fast Freight".into(), ledger.clone());
    distributor.hydrate().await;
    let supplied = distributor.supply(flour, 3.5).await.unwrap();
    assert_eq!(
        distributor.supplied().get(&supplied).unwrap().distributor_name,
        "Fast Freight"
    );

    let mut shop = ShopsDashboard::new("Corner Shop".into(), ledger.clone());
    shop.hydrate().await;
    let shelved = shop.stock_product(supplied, 4.0).await.unwrap();
    let on_shelf = shop.shelf().get(&shelved).unwrap();
    assert_eq!(on_shelf.distributor_name, "Fast Freight");
    assert_eq!(on_shelf.description.as_deref(), Some("Stone-ground"));

    let mut user = UserDashboard::new("Kim".into(), ledger.clone());
    user.hydrate().await;
    let order = user.place_order(shelved, 2).await.unwrap();
    let placed = user.orders().get(&order).unwrap();
    assert_eq!((placed.name.as_str(), placed.quantity, placed.price), ("Flour", 2, 4.0));

    let missing = user.place_order("shopProducts_404".into(), 1).await;
    assert!(matches!(missing, Err(Notice::Failed(_))));

    distributor.hydrate().await;
    assert_eq!(distributor.orders().len(), 1);

    drop((manufacturer, distributor, shop, user, ledger));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_ids_cover_every_role() {
    let system = SupplyChainSystem::start(&Config::default());
    let ids: Vec<_> = DashboardId::ALL
        .into_iter()
        .map(|id| Dashboard::for_id(id, String::new(), system.ledger.clone()).id())
        .collect();
    assert_eq!(ids, DashboardId::ALL.to_vec());
    system.shutdown().await.unwrap();
}
