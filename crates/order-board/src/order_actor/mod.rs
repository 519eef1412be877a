//! # Order Actor
//!
//! The Order Store: a [`ResourceActor`] that owns every [`Order`] in creation
//! order. Orders are appended by `Create` and change only through
//! [`OrderAction::MarkServed`]; nothing is ever removed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](board_actor::ActorEntity) implementation for [`Order`]
//!   and its [`OrderContext`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`ServeOutcome`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use order_board::clients::OrderClient;
//! use order_board::clock::SystemClock;
//! use order_board::model::{MainItem, OrderCreate};
//! use order_board::order_actor::{self, OrderContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client, chrono::Duration::minutes(4));
//!
//!     tokio::spawn(actor.run(OrderContext::new(Arc::new(SystemClock))));
//!
//!     let order = client
//!         .create_order(OrderCreate::new("woman in blue hat", MainItem::Bacon))
//!         .await?;
//!     client.mark_served(order.id).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::model::{Order, OrderId};
use board_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client. Ids are random UUIDs.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(mailbox_capacity, OrderId::new_v4)
}
