//! # Board Page Adapter
//!
//! Glue between the web layer and the Order Store. The HTTP side extracts form
//! fields and path segments and hands them here; templating reads the returned
//! [`BoardView`].
//!
//! | Route | Handler | Result |
//! |-------|---------|--------|
//! | `GET /` | [`BoardAdapter::render`] | [`BoardView`] |
//! | `POST /` | [`BoardAdapter::place_order`] | [`Redirect::home`] |
//! | `POST /serve/{id}` | [`BoardAdapter::serve`] | [`Redirect::home`] |
//!
//! Form validation failures come back as [`OrderError::Validation`](crate::order_actor::OrderError)
//! and nothing is stored. Serving an unknown or malformed id is not an error.

pub mod adapter;
pub mod form;
pub mod view;

pub use adapter::BoardAdapter;
pub use form::OrderForm;
pub use view::*;
