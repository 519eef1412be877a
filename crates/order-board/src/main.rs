//! # Order Board demo
//!
//! Starts the store, places a few orders through the page adapter, serves one,
//! and logs the rendered board as JSON.
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-board
//! ORDER_BOARD_OVERDUE_SECS=0 RUST_LOG=info cargo run -p order-board   # everything overdue
//! ```

use order_board::board::OrderForm;
use order_board::clock::SystemClock;
use order_board::config::BoardConfig;
use order_board::lifecycle::{setup_tracing, BoardSystem};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BoardConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting order board");

    let system = BoardSystem::new(&config, Arc::new(SystemClock))
        .map_err(|e| e.to_string())?;
    let adapter = system.adapter();

    let forms = [
        OrderForm {
            customer_description: "Woman in blue hat".to_string(),
            main_item: "BACON".to_string(),
            modifications: vec!["NO_CEBOLA".to_string()],
            sides: vec!["FRIES".to_string()],
        },
        OrderForm {
            customer_description: "Man with dog".to_string(),
            main_item: "SALADA".to_string(),
            modifications: vec!["SWAP_FALAFEL".to_string(), "NO_MOSTARDA".to_string()],
            sides: vec!["ONION_RINGS".to_string(), "NUGGETS".to_string()],
        },
        OrderForm {
            customer_description: "Kid in red".to_string(),
            main_item: "HOTDOG".to_string(),
            ..Default::default()
        },
    ];

    let span = tracing::info_span!("order_intake");
    async {
        for form in forms {
            if let Err(e) = adapter.place_order(form).await {
                error!(error = %e, "Order rejected");
            }
        }
    }
    .instrument(span)
    .await;

    let first = system
        .order_client
        .list_active(chrono::Utc::now())
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .next();
    if let Some(active) = first {
        adapter
            .serve(&active.order.id.to_string())
            .await
            .map_err(|e| e.to_string())?;
    }

    let view = adapter
        .render(chrono::Utc::now())
        .await
        .map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
    info!("Board:\n{json}");

    drop(adapter);
    system.shutdown().await?;

    info!("Order board stopped");
    Ok(())
}
