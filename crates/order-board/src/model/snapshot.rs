//! Read models derived from the stored orders at a given instant.

use crate::model::Order;
use chrono::{DateTime, Duration, Utc};

/// An unserved order with its overdue flag as of some instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveOrder {
    pub order: Order,
    pub is_overdue: bool,
}

/// Active and served orders taken from a single listing, each in creation order.
///
/// Every order lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub active: Vec<ActiveOrder>,
    pub served: Vec<Order>,
}

impl BoardSnapshot {
    pub fn from_orders(orders: Vec<Order>, as_of: DateTime<Utc>, threshold: Duration) -> Self {
        let mut snapshot = Self::default();
        for order in orders {
            if order.served {
                snapshot.served.push(order);
            } else {
                let is_overdue = order.is_overdue(as_of, threshold);
                snapshot.active.push(ActiveOrder { order, is_overdue });
            }
        }
        snapshot
    }
}
