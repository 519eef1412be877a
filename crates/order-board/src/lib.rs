//! # Order Board
//!
//! The order board of a small food counter: staff place orders through a form,
//! the page lists active orders (flagging the ones waiting too long) and served
//! orders, and a "Served" button moves an order from one list to the other.
//!
//! - [`model`] - [`Order`](model::Order), the closed menu enums, and listing snapshots
//! - [`order_actor`] - the Order Store as a single-owner actor
//! - [`clients`] - [`OrderClient`](clients::OrderClient), the store operations
//! - [`board`] - request handlers and the view model of the page
//! - [`config`], [`clock`], [`lifecycle`] - wiring

pub mod board;
pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
