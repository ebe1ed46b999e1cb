// Re-export all public APIs from the workspace crates

pub use hearth_models::*;
pub use hearth_events::*;
pub use hearth_config::*;
pub use hearth_transport::*;
pub use hearth_api::*;
pub use hearth_store::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use hearth_models::{PowerAction, PowerState, Server, ServerBackup, ServerPatch};

    // Events
    pub use hearth_events::{EventBus, StoreEvent};

    // Store
    pub use hearth_store::{ServerStore, StoreError};

    // Transport
    pub use hearth_transport::{HttpTransport, SessionToken, Transport};

    // Typed API client
    pub use hearth_api::PanelClient;

    // Configuration
    pub use hearth_config::Config;
}
