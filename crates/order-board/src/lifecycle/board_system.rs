use crate::board::BoardAdapter;
use crate::clients::OrderClient;
use crate::clock::Clock;
use crate::config::{BoardConfig, ConfigError};
use crate::order_actor::{self, OrderContext};
use std::sync::Arc;
use tracing::{error, info};

/// The running Order Store plus the handles needed to stop it.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use order_board::clock::SystemClock;
/// use order_board::config::BoardConfig;
/// use order_board::lifecycle::BoardSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = BoardSystem::new(&BoardConfig::default(), Arc::new(SystemClock))
///         .map_err(|e| e.to_string())?;
///
///     let view = system
///         .adapter()
///         .render(chrono::Utc::now())
///         .await
///         .map_err(|e| e.to_string())?;
///     assert!(view.active.is_empty());
///
///     system.shutdown().await
/// }
/// ```
pub struct BoardSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    handle: tokio::task::JoinHandle<()>,
}

impl BoardSystem {
    /// Spawns the Order actor with `clock` as its context. Must be called inside
    /// a Tokio runtime. The config is validated first, so a hand-built one with
    /// a zero mailbox is refused here.
    pub fn new(config: &BoardConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        let config = config.clone().validate()?;
        let (order_actor, generic_client) = order_actor::new(config.mailbox_capacity);
        let order_client = OrderClient::new(generic_client, config.overdue_threshold());

        let handle = tokio::spawn(order_actor.run(OrderContext::new(clock)));
        info!(
            overdue_threshold_secs = config.overdue_threshold_secs,
            mailbox_capacity = config.mailbox_capacity,
            "Board system started"
        );

        Ok(Self {
            order_client,
            handle,
        })
    }

    /// A page adapter sharing this system's store.
    pub fn adapter(&self) -> BoardAdapter {
        BoardAdapter::new(self.order_client.clone())
    }

    /// Drops the system's client and waits for the actor to drain its mailbox.
    ///
    /// Any client or adapter cloned out of the system must be dropped first, or
    /// this waits for it.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down board system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Board system shutdown complete.");
        Ok(())
    }
}
