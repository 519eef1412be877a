//! # Framework Errors
//!
//! Errors raised by the store actor and its client, independent of the entity
//! being stored. Entity-specific failures travel boxed inside
//! [`FrameworkError::EntityError`] so the caller can downcast them back.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id generated: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
