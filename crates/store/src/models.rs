use crate::errors::StoreError;
use dashmap::DashMap;
use hearth_api::PanelClient;
use hearth_events::EventBus;
use hearth_models::Server;
use parking_lot::RwLock;
use std::sync::Arc;

/// Data store over the panel API: a keyed cache of server records plus the
/// most recent operation failure. Entries are created by `fetch_server`,
/// mutated by shallow-merge updates and never evicted.
pub struct ServerStore {
    pub(super) api: PanelClient,
    pub(super) servers: DashMap<String, Server>,
    pub(super) error: RwLock<Option<StoreError>>,
    pub(super) events: Arc<EventBus>,
}
