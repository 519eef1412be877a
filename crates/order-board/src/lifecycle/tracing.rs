//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # Placed, served, actor lifecycle
//! RUST_LOG=debug cargo run    # Plus every request with its payload
//! ```
//!
//! With `RUST_LOG=info` a create and a serve look like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO create_order: Created entity_type="Order" id=8f0c... size=1
//! INFO create_order: Order placed order_id=8f0c...
//! INFO serve:mark_served: Order served order_id=8f0c...
//! INFO serve: Marked served order_id=8f0c...
//! ```
//!
//! Rejected forms and unknown serve ids show up at `WARN`.

/// Installs the global subscriber. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
