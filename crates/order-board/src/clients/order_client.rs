//! # Order Client
//!
//! The Order Store operations: create, serve, and the active/served listings.
//! Wraps a `ResourceClient<Order>` and knows the overdue threshold, so every
//! listing is classified against the `as_of` the caller passes in.
use crate::model::{ActiveOrder, BoardSnapshot, Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderError, ServeOutcome};
use async_trait::async_trait;
use board_actor::{ActorClient, FrameworkError, ResourceClient};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    threshold: Duration,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, threshold: Duration) -> Self {
        Self { inner, threshold }
    }

    /// Waiting time at which an active order becomes overdue.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Places an order and returns it as stored.
    #[instrument(skip(self), fields(main_item = %params.main_item))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(OrderError::from)?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Marks an order served. An unknown id is reported as
    /// [`ServeOutcome::NotFound`], not as an error.
    #[instrument(skip(self))]
    pub async fn mark_served(&self, id: OrderId) -> Result<ServeOutcome, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::MarkServed).await {
            Ok(outcome) => Ok(outcome),
            Err(FrameworkError::NotFound(_)) => {
                warn!(order_id = %id, "Serve requested for unknown order");
                Ok(ServeOutcome::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Unserved orders in creation order, each flagged overdue as of `as_of`.
    #[instrument(skip(self))]
    pub async fn list_active(&self, as_of: DateTime<Utc>) -> Result<Vec<ActiveOrder>, OrderError> {
        Ok(self.board(as_of).await?.active)
    }

    /// Served orders in creation order.
    #[instrument(skip(self))]
    pub async fn list_served(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| o.served).collect())
    }

    /// Both listings from one read of the store.
    #[instrument(skip(self))]
    pub async fn board(&self, as_of: DateTime<Utc>) -> Result<BoardSnapshot, OrderError> {
        let orders = self.list().await?;
        let snapshot = BoardSnapshot::from_orders(orders, as_of, self.threshold);
        debug!(
            active = snapshot.active.len(),
            served = snapshot.served.len(),
            "Board read"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
