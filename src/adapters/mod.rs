// Adapters layer: concrete implementations for external systems (stores, discovery, http).

pub mod discovery;
pub mod http;
pub mod store;
