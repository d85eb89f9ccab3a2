//! Domain model for todo items.

use serde::{Deserialize, Serialize};

// == Item ==
/// A persisted todo item. The `id` is assigned by the record store and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

// == New Item ==
/// The caller-supplied part of an item, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
}
