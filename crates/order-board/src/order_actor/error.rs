//! Error types for the Order actor.

use board_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order data provided is invalid. Nothing was stored.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    /// Recovers an `OrderError` raised inside the actor; anything else is a
    /// communication failure.
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_is_recovered() {
        let wrapped = FrameworkError::EntityError(Box::new(OrderError::Validation(
            "customer description is required".to_string(),
        )));
        assert_eq!(
            OrderError::from(wrapped),
            OrderError::Validation("customer description is required".to_string())
        );
    }

    #[test]
    fn test_foreign_errors_become_communication_errors() {
        let wrapped = FrameworkError::EntityError(Box::new(std::io::Error::other("disk on fire")));
        assert_eq!(
            OrderError::from(wrapped),
            OrderError::ActorCommunicationError("disk on fire".to_string())
        );
        assert_eq!(
            OrderError::from(FrameworkError::ActorClosed),
            OrderError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
