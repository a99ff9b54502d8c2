//! Menu Domain Module
//!
//! This module contains the menu item CRUD surface:
//! - Domain models (MenuItem, request payloads, validated changes)
//! - Schema-on-write validation
//! - Application state holding the store handle
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;
pub mod validation;

pub use handlers::routes;
pub use state::{AppState, SharedState};
