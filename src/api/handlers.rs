//! API Handlers
//!
//! HTTP request handlers for each todo service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::clock::{Clock, SystemClock};
use crate::error::{AppError, Result};
use crate::models::{CreateItemRequest, HealthResponse, ItemResponse, StatsResponse};
use crate::service::ItemService;
use crate::store::RecordStore;

/// Application state shared across all handlers.
///
/// Owns the item service, and through it the cache, for the lifetime of
/// the server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ItemService>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: ItemService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState over `store` with a system clock.
    pub fn with_store(store: Arc<dyn RecordStore>, ttl: Duration) -> Self {
        Self::with_clock(store, ttl, Arc::new(SystemClock))
    }

    /// Creates a new AppState over `store`, measuring expiry with `clock`.
    pub fn with_clock(store: Arc<dyn RecordStore>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::new(ItemService::new(store, ttl, clock))
    }
}

/// Handler for POST /todos
///
/// Creates an item and returns it with its assigned id.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ItemResponse>> {
    let new_item = req.into_new_item().map_err(AppError::Validation)?;
    let item = state.service.create(new_item).await?;

    Ok(Json(item.into()))
}

/// Handler for GET /todos/:id
///
/// Repeat requests for the same id are served from cache until the TTL
/// elapses.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>> {
    if id <= 0 {
        return Err(AppError::Validation(format!(
            "Id must be a positive integer, got {}",
            id
        )));
    }

    match state.service.fetch(id).await? {
        Some(item) => Ok(Json(item.into())),
        None => Err(AppError::NotFound),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics and, when instrumented, store accesses.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.service.cache_stats(),
        state.service.store_accesses(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
