//! Todo Cache - a small todo item service
//!
//! Items are persisted in SQLite; point lookups go through a read-through
//! cache whose entries expire after a fixed TTL.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::ItemService;
