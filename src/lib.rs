//! Menu Service Library
//!
//! A small HTTP record store for restaurant menu items, backed by MongoDB
//! or an in-memory store.

// Domain modules
pub mod menu;
pub mod store;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
