use crate::model::{MainItem, Modification, Side};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// A fresh random id.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A customer order on the board.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](board_actor::ActorEntity) trait,
/// so the whole collection is owned by a single [`ResourceActor`](board_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_description: String,
    pub main_item: MainItem,
    pub modifications: BTreeSet<Modification>,
    pub sides: BTreeSet<Side>,
    pub time_placed: DateTime<Utc>,
    pub served: bool,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_description: String,
    pub main_item: MainItem,
    pub modifications: BTreeSet<Modification>,
    pub sides: BTreeSet<Side>,
}

impl OrderCreate {
    pub fn new(customer_description: impl Into<String>, main_item: MainItem) -> Self {
        Self {
            customer_description: customer_description.into(),
            main_item,
            modifications: BTreeSet::new(),
            sides: BTreeSet::new(),
        }
    }

    pub fn with_modifications(
        mut self,
        modifications: impl IntoIterator<Item = Modification>,
    ) -> Self {
        self.modifications.extend(modifications);
        self
    }

    pub fn with_sides(mut self, sides: impl IntoIterator<Item = Side>) -> Self {
        self.sides.extend(sides);
        self
    }
}

impl Order {
    /// Time waited as of `as_of`. Negative when `as_of` precedes placement.
    pub fn elapsed(&self, as_of: DateTime<Utc>) -> Duration {
        as_of - self.time_placed
    }

    pub fn is_overdue(&self, as_of: DateTime<Utc>, threshold: Duration) -> bool {
        is_overdue(self.time_placed, as_of, threshold)
    }
}

/// An order is overdue once it has waited at least `threshold`.
pub fn is_overdue(time_placed: DateTime<Utc>, as_of: DateTime<Utc>, threshold: Duration) -> bool {
    as_of - time_placed >= threshold
}
