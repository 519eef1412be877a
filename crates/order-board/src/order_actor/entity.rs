//! [`ActorEntity`] implementation for [`Order`].

use super::{OrderAction, OrderError, ServeOutcome};
use crate::clock::Clock;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use board_actor::ActorEntity;
use std::sync::Arc;
use tracing::info;

/// Runtime context of the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    /// Stamps `time_placed` on every new order.
    pub clock: Arc<dyn Clock>,
}

impl OrderContext {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = ServeOutcome;
    type Context = OrderContext;
    type Error = OrderError;

    /// Trims the description and stamps placement time from the context clock.
    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &OrderContext,
    ) -> Result<Self, OrderError> {
        let customer_description = params.customer_description.trim();
        if customer_description.is_empty() {
            return Err(OrderError::Validation(
                "customer description is required".to_string(),
            ));
        }

        Ok(Self {
            id,
            customer_description: customer_description.to_string(),
            main_item: params.main_item,
            modifications: params.modifications,
            sides: params.sides,
            time_placed: ctx.clock.now(),
            served: false,
        })
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<ServeOutcome, OrderError> {
        match action {
            OrderAction::MarkServed => {
                if self.served {
                    return Ok(ServeOutcome::AlreadyServed);
                }
                self.served = true;
                info!(order_id = %self.id, "Order served");
                Ok(ServeOutcome::Served)
            }
        }
    }
}
