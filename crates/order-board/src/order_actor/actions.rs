//! Custom actions for the Order actor.
//!
//! Orders have exactly one mutation after creation: being served. It is handled
//! by [`ActorEntity::handle_action`](board_actor::ActorEntity::handle_action).

/// Custom actions for Order entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Flip `served` to true. Repeating it changes nothing.
    MarkServed,
}

/// What a serve request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// The order was active and is now served.
    Served,
    /// The order had already been served.
    AlreadyServed,
    /// No order has that id. Usually a stale page or a double click.
    NotFound,
}
