//! API Module
//!
//! HTTP handlers and routing for the todo service REST API.
//!
//! # Endpoints
//! - `POST /todos` - Create an item
//! - `GET /todos/:id` - Fetch an item, served from cache when fresh
//! - `GET /stats` - Cache and store access statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
