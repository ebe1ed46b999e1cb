use super::models::{EventBus, StoreEvent};
use std::sync::Arc;
use tokio::sync::broadcast;

impl EventBus {
    pub fn new(capacity: usize) -> Arc<Self> {
        let (tx, _) = broadcast::channel(capacity);
        Arc::new(Self { tx })
    }

    /// Opens a new subscription. Each receiver sees every event emitted
    /// after this call; slow receivers that fall behind the channel
    /// capacity observe a `Lagged` error and continue from the newest event.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: StoreEvent) {
        tracing::debug!("Store event: {:?}", event);
        // Send fails only when no receiver is subscribed, which is fine
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
