//! Domain model and request/response DTOs for the todo service
//!
//! `item` holds the stored shape; `requests` and `responses` define the
//! HTTP bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{Item, NewItem};
pub use requests::CreateItemRequest;
pub use responses::{ErrorResponse, HealthResponse, ItemResponse, StatsResponse};
