use super::{BoardView, OrderForm, Redirect};
use crate::clients::OrderClient;
use crate::model::{OrderCreate, OrderId};
use crate::order_actor::{OrderError, ServeOutcome};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

/// Request handlers of the board page, over the Order Store.
#[derive(Clone)]
pub struct BoardAdapter {
    orders: OrderClient,
}

impl BoardAdapter {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    /// `POST /`: validate the form, place the order, go back to the board.
    #[instrument(skip(self, form))]
    pub async fn place_order(&self, form: OrderForm) -> Result<Redirect, OrderError> {
        let params = OrderCreate::try_from(form).inspect_err(|e| {
            warn!(error = %e, "Rejected order form");
        })?;
        self.orders.create_order(params).await?;
        Ok(Redirect::home())
    }

    /// `POST /serve/{id}`: an id that does not parse or names no order is
    /// ignored and still redirects home.
    #[instrument(skip(self))]
    pub async fn serve(&self, raw_id: &str) -> Result<Redirect, OrderError> {
        let id = match raw_id.trim().parse::<OrderId>() {
            Ok(id) => id,
            Err(e) => {
                warn!(raw_id, error = %e, "Ignoring serve request with malformed id");
                return Ok(Redirect::home());
            }
        };

        match self.orders.mark_served(id).await? {
            ServeOutcome::Served => info!(order_id = %id, "Marked served"),
            outcome => debug!(order_id = %id, ?outcome, "Nothing to serve"),
        }
        Ok(Redirect::home())
    }

    /// `GET /`: the board as of `as_of`.
    #[instrument(skip(self))]
    pub async fn render(&self, as_of: DateTime<Utc>) -> Result<BoardView, OrderError> {
        let snapshot = self.orders.board(as_of).await?;
        Ok(BoardView::build(snapshot, as_of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MainItem, Order};
    use board_actor::mock::MockClient;
    use board_actor::FrameworkError;
    use chrono::Duration;
    use std::collections::BTreeSet;

    fn adapter(mock: &MockClient<Order>) -> BoardAdapter {
        BoardAdapter::new(OrderClient::new(mock.client(), Duration::minutes(4)))
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_store() {
        // No expectations: any request would panic the mock.
        let mock = MockClient::<Order>::new();
        let form = OrderForm {
            customer_description: "man with dog".to_string(),
            main_item: "PIZZA".to_string(),
            ..Default::default()
        };

        let result = adapter(&mock).place_order(form).await;

        assert!(matches!(result, Err(OrderError::Validation(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_malformed_id_redirects_without_a_request() {
        let mock = MockClient::<Order>::new();

        let redirect = adapter(&mock).serve("not-a-uuid").await.unwrap();

        assert_eq!(redirect, Redirect::home());
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_id_redirects_home() {
        let mut mock = MockClient::<Order>::new();
        let id = OrderId::new_v4();
        mock.expect_action(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        let redirect = adapter(&mock).serve(&id.to_string()).await.unwrap();

        assert_eq!(redirect.location, "/");
        mock.verify();
    }

    #[tokio::test]
    async fn test_render_surfaces_communication_failure() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let result = adapter(&mock).render(Utc::now()).await;

        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_render_builds_view() {
        let mut mock = MockClient::<Order>::new();
        let placed = Utc::now();
        mock.expect_list().return_ok(vec![Order {
            id: OrderId::new_v4(),
            customer_description: "kid in red".to_string(),
            main_item: MainItem::Verdadeirinho,
            modifications: BTreeSet::new(),
            sides: BTreeSet::new(),
            time_placed: placed,
            served: false,
        }]);

        let view = adapter(&mock).render(placed + Duration::minutes(1)).await.unwrap();

        assert_eq!(view.active.len(), 1);
        assert_eq!(view.active[0].minutes_waiting, 1.0);
        assert!(!view.active[0].overdue);
        assert!(view.served.is_empty());
        mock.verify();
    }
}
