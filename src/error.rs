//! HTTP error taxonomy
//!
//! Every handler failure is rendered as `{"error": <message>}`. Store causes
//! are logged here and never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

pub const REQUIRED_FIELDS: &str = "Name and price are required";
pub const CREATE_FAILED: &str = "Error creating menu item";
pub const FETCH_FAILED: &str = "Error fetching menu items";
pub const UPDATE_FAILED: &str = "Error updating menu item";
pub const DELETE_FAILED: &str = "Error deleting menu item";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Client-supplied data failed a required-field or type constraint
    #[error("{0}")]
    Validation(String),

    #[error("Menu item not found")]
    NotFound,

    /// The store failed; `message` is the only part shown to the caller
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Returns a closure mapping a store error onto a persistence failure.
    pub fn persistence(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Persistence { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Persistence { message, source } = &self {
            tracing::error!(error = %source, "{message}");
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(ApiError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);

        let err = ApiError::persistence(CREATE_FAILED)(StoreError::Unavailable("down".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn persistence_message_hides_cause() {
        let err = ApiError::persistence(FETCH_FAILED)(StoreError::Unavailable(
            "connection refused".into(),
        ));
        assert_eq!(err.to_string(), FETCH_FAILED);
    }
}
