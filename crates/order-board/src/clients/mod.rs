//! Domain clients wrapping the generic [`ResourceClient`](board_actor::ResourceClient).

pub mod order_client;

pub use board_actor::ActorClient;
pub use order_client::OrderClient;
