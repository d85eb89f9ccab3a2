//! Request DTOs for the todo API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::NewItem;

/// Request body for creating an item (POST /todos)
///
/// `title` is optional at the serde level so a missing title surfaces as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItemRequest {
    /// Item title, required and non-blank
    #[serde(default)]
    pub title: Option<String>,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.title.as_deref() {
            None => Some("Title is required".to_string()),
            Some(title) if title.trim().is_empty() => Some("Title cannot be empty".to_string()),
            Some(_) => None,
        }
    }

    /// Converts a validated request into a [`NewItem`].
    ///
    /// Returns the validation message when the request is invalid.
    pub fn into_new_item(self) -> Result<NewItem, String> {
        if let Some(error_msg) = self.validate() {
            return Err(error_msg);
        }
        Ok(NewItem::new(self.title.unwrap_or_default(), self.description))
    }
}
