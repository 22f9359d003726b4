//! Venue Admin library.
//!
//! This crate provides the dashboard as a library, allowing it to be tested
//! and reused. The binary in `main.rs` wires in observability layers and
//! serves the router built by [`app`].
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - Remote REST data service for all entity storage (no local database)
//! - tower-sessions for the login session

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the application router with its session layer.
///
/// Observability layers (request tracing, Sentry) are added by the binary;
/// tests can mount this router directly against a mock remote API.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes::routes().layer(session_layer).with_state(state)
}
