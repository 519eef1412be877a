use board_actor::ActorClient;
use chrono::{DateTime, Duration, TimeZone, Utc};
use order_board::board::{OrderForm, Redirect};
use order_board::clock::ManualClock;
use order_board::config::{BoardConfig, ConfigError};
use order_board::lifecycle::BoardSystem;
use order_board::order_actor::OrderError;
use std::collections::HashSet;
use std::sync::Arc;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap()
}

fn start(config: &BoardConfig, clock: ManualClock) -> BoardSystem {
    BoardSystem::new(config, Arc::new(clock))
        .expect("Failed to start board system")
}

fn form(
    description: &str,
    main_item: &str,
    modifications: &[&str],
    sides: &[&str],
) -> OrderForm {
    OrderForm {
        customer_description: description.to_string(),
        main_item: main_item.to_string(),
        modifications: modifications.iter().map(|m| m.to_string()).collect(),
        sides: sides.iter().map(|s| s.to_string()).collect(),
    }
}

/// Full end-to-end run through the page adapter with a real actor.
#[tokio::test]
async fn test_full_board_flow() {
    let clock = ManualClock::new(t0());
    let system = start(&BoardConfig::default(), clock.clone());
    let adapter = system.adapter();

    let redirect = adapter
        .place_order(form("Woman in blue hat", "BACON", &["NO_CEBOLA"], &["FRIES"]))
        .await
        .expect("Failed to place order");
    assert_eq!(redirect, Redirect::home());

    clock.advance(Duration::minutes(1));
    adapter
        .place_order(form("Man with dog", "SALADA", &[], &["ONION_RINGS", "NUGGETS"]))
        .await
        .expect("Failed to place order");

    // Two minutes in: nothing overdue yet.
    let view = adapter.render(t0() + Duration::minutes(2)).await.unwrap();
    assert_eq!(view.active.len(), 2);
    assert_eq!(view.active[0].customer_description, "Woman in blue hat");
    assert_eq!(view.active[0].main_item, "Bacon");
    assert_eq!(view.active[0].modifications, vec!["No Cebola"]);
    assert_eq!(view.active[0].sides, vec!["Batata Frita"]);
    assert_eq!(view.active[0].minutes_waiting, 2.0);
    assert!(view.active.iter().all(|o| !o.overdue));

    // Four and a half minutes in: only the first order has waited four minutes.
    let view = adapter.render(t0() + Duration::seconds(270)).await.unwrap();
    assert!(view.active[0].overdue);
    assert!(!view.active[1].overdue);

    // The second order reaches the threshold exactly one minute later.
    let view = adapter.render(t0() + Duration::minutes(5)).await.unwrap();
    assert!(view.active[1].overdue);

    let serve_id = view.active[0].id.to_string();
    assert_eq!(view.active[0].serve_path, format!("/serve/{serve_id}"));
    adapter.serve(&serve_id).await.unwrap();

    let view = adapter.render(t0() + Duration::minutes(5)).await.unwrap();
    assert_eq!(view.active.len(), 1);
    assert_eq!(view.active[0].customer_description, "Man with dog");
    assert_eq!(view.served.len(), 1);
    assert_eq!(view.served[0].customer_description, "Woman in blue hat");
    assert_eq!(view.served[0].main_item, "Bacon");

    drop(adapter);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_forms_are_not_stored() {
    let system = start(&BoardConfig::default(), ManualClock::new(t0()));
    let adapter = system.adapter();

    let cases = [
        form("   ", "BACON", &[], &[]),
        form("Tall man", "HOTDOG", &[], &[]),
        form("Tall man", "BACON", &["EXTRA_PICKLES"], &[]),
        form("Tall man", "BACON", &[], &["SALAD"]),
        form("Tall man", "", &[], &[]),
    ];
    for submitted in cases {
        let result = adapter.place_order(submitted).await;
        assert!(
            matches!(result, Err(OrderError::Validation(_))),
            "expected validation error, got {result:?}"
        );
    }

    assert!(system.order_client.list().await.unwrap().is_empty());

    drop(adapter);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_serve_with_bad_ids_redirects_home() {
    let system = start(&BoardConfig::default(), ManualClock::new(t0()));
    let adapter = system.adapter();
    adapter
        .place_order(form("Kid in red", "VERDADEIRINHO", &[], &[]))
        .await
        .unwrap();

    for raw_id in ["", "order_1", "not-a-uuid", "7b4d7a52-5c9e-4f8e-9b1a-2f7d0c3e4a61"] {
        assert_eq!(adapter.serve(raw_id).await.unwrap(), Redirect::home());
    }

    let view = adapter.render(t0()).await.unwrap();
    assert_eq!(view.active.len(), 1);
    assert!(view.served.is_empty());

    drop(adapter);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_threshold_comes_from_config() {
    let config = BoardConfig::from_yaml_str("overdue_threshold_secs: 60\n").unwrap();
    let system = start(&config, ManualClock::new(t0()));
    assert_eq!(system.order_client.threshold(), Duration::seconds(60));
    let adapter = system.adapter();
    adapter
        .place_order(form("Quick one", "BACON", &[], &[]))
        .await
        .unwrap();

    let view = adapter.render(t0() + Duration::seconds(59)).await.unwrap();
    assert!(!view.active[0].overdue);
    let view = adapter.render(t0() + Duration::seconds(60)).await.unwrap();
    assert!(view.active[0].overdue);

    drop(adapter);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_all_land_with_distinct_ids() {
    let system = start(&BoardConfig::default(), ManualClock::new(t0()));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let adapter = system.adapter();
        tasks.push(tokio::spawn(async move {
            adapter
                .place_order(form(&format!("customer {i}"), "SALADA", &[], &["FRIES"]))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders.len(), 20);
    let ids: HashSet<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), 20);
    let descriptions: HashSet<_> = orders
        .iter()
        .map(|o| o.customer_description.clone())
        .collect();
    assert_eq!(descriptions.len(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_board_still_lists_menu() {
    let system = start(&BoardConfig::default(), ManualClock::new(t0()));

    let view = system.adapter().render(t0()).await.unwrap();

    assert!(view.active.is_empty());
    assert!(view.served.is_empty());
    let codes: Vec<_> = view.menu.main_items.iter().map(|o| o.code).collect();
    assert_eq!(codes, vec!["VERDADEIRINHO", "BACON", "SALADA"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hand_built_config_is_validated_on_start() {
    let config = BoardConfig {
        mailbox_capacity: 0,
        ..Default::default()
    };

    let result = BoardSystem::new(&config, Arc::new(ManualClock::new(t0())));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
