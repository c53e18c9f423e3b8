//! Demo run: signs a farmer up, follows `/` to the farmer dashboard, lists
//! and sells a crop, then signs out.

use actor_framework::tracing::setup_tracing;
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use supply_chain::config::Config;
use supply_chain::dashboard::{Dashboard, Opened};
use supply_chain::forms::SignUpForm;
use supply_chain::lifecycle::SupplyChainSystem;
use supply_chain::model::{InventoryCreate, Role};
use supply_chain::routing::{navigate, View};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing(&config.log_filter);

    info!(?config, "Starting supply chain ledger");
    let system = SupplyChainSystem::start(&config);
    system.session.resolved().await;

    let outcome = system
        .forms()
        .sign_up(SignUpForm {
            name: "Asha".into(),
            email: "asha@farm.test".into(),
            phone: "555-0100".into(),
            password: "harvest-2024".into(),
            user_type: Some(Role::Farmer),
        })
        .instrument(tracing::info_span!("sign_up"))
        .await;
    if outcome.is_error() {
        bail!("sign-up failed: {:?}", outcome.message);
    }

    let session = system.session.snapshot();
    let view = navigate("/", &session);
    info!(?view, "Dispatched");

    let Opened::Ready(Dashboard::Farmer(mut farmer)) =
        Dashboard::open(&session, &system.ledger)
    else {
        bail!("expected the farmer dashboard, got {view:?}");
    };

    let span = tracing::info_span!("farmer");
    async {
        for notice in farmer.hydrate().await {
            warn!(%notice, "Load failed");
        }

        farmer
            .add_inventory(InventoryCreate::new("Wheat", 50, 12.5))
            .await
            .map_err(|n| anyhow!("{n}"))?;
        let corn = farmer
            .add_crop_for_sale("Corn", 10, 5.0)
            .await
            .map_err(|n| anyhow!("{n}"))?;

        match farmer.sell_crop(corn.clone(), 15).await {
            Ok(left) => info!(left, "Sold 15"),
            Err(notice) => warn!(%notice, "Sale refused"),
        }
        let left = farmer
            .sell_crop(corn, 4)
            .await
            .map_err(|n| anyhow!("{n}"))?;
        info!(left, "Sold 4");

        println!(
            "inventory: {}",
            serde_json::to_string_pretty(farmer.inventory().records())
                .context("serializing inventory")?
        );
        println!(
            "cropsForSale: {}",
            serde_json::to_string_pretty(farmer.crops_for_sale().records())
                .context("serializing crops")?
        );
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;
    drop(farmer);

    let logout = system.forms().log_out().await;
    info!(?logout, "Logged out");
    let session = system.session.refresh().await?;
    if navigate("/", &session) != View::SignIn {
        warn!("Still signed in after logout");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
