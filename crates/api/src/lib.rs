mod client;
mod models;
mod errors;
mod servers;
mod backups;
mod catalog;
mod files;
mod mods;
mod subdomains;

pub use client::PanelClient;
pub use models::*;
pub use errors::ApiError;
