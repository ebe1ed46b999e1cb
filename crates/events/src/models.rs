use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Store notifications consumers can subscribe to.
/// Replaces framework-driven reactivity with an explicit subscription channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    // Cache mutations
    ServerCached { server_id: String },
    ServerPatched { server_id: String, fields: Vec<String> },

    // Error slot
    ErrorSet { operation: String },
    ErrorCleared,
}

pub struct EventBus {
    pub(super) tx: broadcast::Sender<StoreEvent>,
}
