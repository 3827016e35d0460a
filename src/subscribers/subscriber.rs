//! # The `Subscribe` trait and bus attachment.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::events::{Bus, Event};

/// # Receives run events.
///
/// Implementations should return quickly; a slow subscriber delays delivery
/// to the subscribers attached after it in the same `attach` call.
#[async_trait]
pub trait Subscribe: Send + Sync {
    /// Called once per delivered event.
    async fn on_event(&self, event: &Event);

    /// Returns a stable subscriber name for diagnostics.
    fn name(&self) -> &str {
        "subscriber"
    }
}

/// Subscribes to the bus and forwards events to the given subscribers.
///
/// Delivery is in-order per attachment. Lagged receivers skip the oldest
/// events and keep going; the listener exits when the bus is dropped.
pub fn attach(bus: &Bus, subscribers: Vec<Arc<dyn Subscribe>>) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => {
                    for sub in &subscribers {
                        sub.on_event(&ev).await;
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    })
}
