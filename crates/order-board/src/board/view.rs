//! View model of the board page, built from a [`BoardSnapshot`].

use crate::model::{BoardSnapshot, MainItem, Modification, Order, OrderId, Side};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a handler sends the browser next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
}

impl Redirect {
    /// The board page, `/`.
    pub fn home() -> Self {
        Self {
            location: "/".to_string(),
        }
    }
}

/// Target of the "Served" button for an order.
pub fn serve_path(id: OrderId) -> String {
    format!("/serve/{id}")
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub active: Vec<ActiveOrderView>,
    pub served: Vec<ServedOrderView>,
    pub menu: MenuView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveOrderView {
    pub id: OrderId,
    pub customer_description: String,
    pub main_item: &'static str,
    pub modifications: Vec<&'static str>,
    pub sides: Vec<&'static str>,
    /// Whole wait in minutes, one decimal place.
    pub minutes_waiting: f64,
    pub overdue: bool,
    pub serve_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServedOrderView {
    pub id: OrderId,
    pub customer_description: String,
    pub main_item: &'static str,
}

/// Options for the three selects of the order form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView {
    pub main_items: Vec<MenuOption>,
    pub modifications: Vec<MenuOption>,
    pub sides: Vec<MenuOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    pub code: &'static str,
    pub label: &'static str,
}

impl Default for MenuView {
    fn default() -> Self {
        Self {
            main_items: options(MainItem::ALL, MainItem::code, MainItem::label),
            modifications: options(Modification::ALL, Modification::code, Modification::label),
            sides: options(Side::ALL, Side::code, Side::label),
        }
    }
}

fn options<T: Copy>(
    all: &[T],
    code: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> Vec<MenuOption> {
    all.iter()
        .map(|&value| MenuOption {
            code: code(value),
            label: label(value),
        })
        .collect()
}

impl BoardView {
    pub fn build(snapshot: BoardSnapshot, as_of: DateTime<Utc>) -> Self {
        let active = snapshot
            .active
            .into_iter()
            .map(|active| {
                let order = active.order;
                ActiveOrderView {
                    id: order.id,
                    main_item: order.main_item.label(),
                    modifications: order.modifications.iter().map(|m| m.label()).collect(),
                    sides: order.sides.iter().map(|s| s.label()).collect(),
                    minutes_waiting: minutes_waiting(&order, as_of),
                    overdue: active.is_overdue,
                    serve_path: serve_path(order.id),
                    customer_description: order.customer_description,
                }
            })
            .collect();

        let served = snapshot
            .served
            .into_iter()
            .map(|order| ServedOrderView {
                id: order.id,
                main_item: order.main_item.label(),
                customer_description: order.customer_description,
            })
            .collect();

        Self {
            active,
            served,
            menu: MenuView::default(),
        }
    }
}

fn minutes_waiting(order: &Order, as_of: DateTime<Utc>) -> f64 {
    let millis = order.elapsed(as_of).num_milliseconds().max(0);
    (millis as f64 / 6_000.0).round() / 10.0
}
