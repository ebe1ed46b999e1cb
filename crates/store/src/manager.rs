use super::models::ServerStore;
use crate::errors::StoreError;
use dashmap::DashMap;
use hearth_api::PanelClient;
use hearth_config::Config;
use hearth_events::{EventBus, StoreEvent};
use hearth_models::{Server, ServerPatch};
use hearth_transport::HttpTransport;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

impl ServerStore {
    pub fn new(api: PanelClient, events: Arc<EventBus>) -> Self {
        Self {
            api,
            servers: DashMap::new(),
            error: RwLock::new(None),
            events,
        }
    }

    /// Builds a store wired to a reqwest transport described by `config`
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let transport = HttpTransport::new(config)
            .map_err(|e| StoreError::new("from_config", e))?;
        let events = EventBus::new(config.store.event_channel_capacity);
        Ok(Self::new(PanelClient::new(Arc::new(transport)), events))
    }

    /// Opens a subscription to store notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Returns a copy of the cached record, or `None` if the server was
    /// never fetched
    pub fn get_server(&self, server_id: &str) -> Option<Server> {
        self.servers.get(server_id).map(|entry| entry.value().clone())
    }

    /// Ids of every cached server
    pub fn cached_servers(&self) -> Vec<String> {
        self.servers.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn has_error(&self) -> bool {
        self.error.read().is_some()
    }

    /// The most recent operation failure, if any
    pub fn last_error(&self) -> Option<StoreError> {
        self.error.read().clone()
    }

    /// Empties the error slot
    pub fn clear_error(&self) {
        let previous = self.error.write().take();
        if previous.is_some() {
            self.events.emit(StoreEvent::ErrorCleared);
        }
    }

    /// Shallow-merges a partial record into the cache entry. Unknown servers
    /// are never created here; the update degrades to a logged warning.
    pub fn update_server(&self, server_id: &str, patch: ServerPatch) {
        match self.servers.get_mut(server_id) {
            Some(mut entry) => {
                let fields = patch.changed_fields();
                entry.merge(patch);
                self.events.emit(StoreEvent::ServerPatched {
                    server_id: server_id.to_string(),
                    fields,
                });
            }
            None => {
                tracing::warn!("Ignoring update for unknown server {}", server_id);
            }
        }
    }

    /// Records a failure in the error slot and hands it back to the caller
    pub(super) fn record_failure<E: std::fmt::Display>(
        &self,
        operation: &str,
        source: E,
    ) -> StoreError {
        let error = StoreError::new(operation, source);
        *self.error.write() = Some(error.clone());
        self.events.emit(StoreEvent::ErrorSet {
            operation: operation.to_string(),
        });
        error
    }
}
