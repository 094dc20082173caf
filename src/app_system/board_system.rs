use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use super::config::BoardConfig;
use crate::actor_framework::ResourceActor;
use crate::clients::OrderClient;
use crate::clock::{Clock, SystemClock};
use crate::domain::Order;

/// The running board: one actor owning the order collection plus its client.
///
/// Responsible for starting the actor, wiring the id generator and clock, and
/// handling shutdown.
pub struct BoardSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BoardSystem {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Must be called from inside a tokio runtime.
    pub fn with_clock(config: BoardConfig, clock: Arc<dyn Clock>) -> Self {
        info!(buffer_size = config.buffer_size, id_prefix = %config.id_prefix, "Starting board system");

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let prefix = config.id_prefix;
        let next_order_id = move || {
            let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("{}_{}", prefix, id)
        };

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.buffer_size, next_order_id, clock);
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Closes the command channel and waits for the actor to drain.
    ///
    /// Clones of the client held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down board system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Board system shutdown complete.");
        Ok(())
    }
}
