//! REST API handlers for menu items
//!
//! Each handler validates its input, makes one call to the store and maps
//! the outcome onto a status code.

use super::{models::*, state::SharedState, validation::*};
use crate::error::{ApiError, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, UPDATE_FAILED};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{debug, info};

/// Creates routes for menu operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(list_menu_items).post(create_menu_item))
        .route("/menu/:id", put(update_menu_item).delete(delete_menu_item))
}

/// Unwraps a JSON body, turning extractor failures into validation errors.
///
/// A request without a JSON content type is read as an empty object.
fn json_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(e) => Err(ApiError::validation(e.body_text())),
    }
}

/// Endpoint: POST /menu
async fn create_menu_item(
    State(state): State<SharedState>,
    body: Result<Json<CreateMenuItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let item = validate_new_item(json_body(body)?)?;

    let created = state
        .store
        .insert(item)
        .await
        .map_err(ApiError::persistence(CREATE_FAILED))?;

    info!(id = %created.id, name = %created.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Endpoint: GET /menu
async fn list_menu_items(
    State(state): State<SharedState>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state
        .store
        .find_all()
        .await
        .map_err(ApiError::persistence(FETCH_FAILED))?;

    debug!(count = items.len(), "Menu items listed");
    Ok(Json(items))
}

/// Endpoint: PUT /menu/:id
/// Replaces the supplied fields and returns the item as stored afterwards.
async fn update_menu_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateMenuItemInput>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_item_id(&id)?;
    let changes = validate_changes(json_body(body)?)?;

    let updated = state
        .store
        .update_by_id(id, changes)
        .await
        .map_err(ApiError::persistence(UPDATE_FAILED))?
        .ok_or(ApiError::NotFound)?;

    info!(id = %updated.id, "Menu item updated");
    Ok(Json(updated))
}

/// Endpoint: DELETE /menu/:id
async fn delete_menu_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_item_id(&id)?;

    let deleted = state
        .store
        .delete_by_id(id)
        .await
        .map_err(ApiError::persistence(DELETE_FAILED))?
        .ok_or(ApiError::NotFound)?;

    info!(id = %deleted.id, "Menu item deleted");
    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
