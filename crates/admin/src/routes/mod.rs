//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (pings the remote API)
//!
//! GET  /                          - Redirect to the businesses list
//!
//! # Auth
//! GET  /login                     - Login page
//! POST /login                     - Authenticate against the user collection
//! POST /logout                    - Logout
//!
//! # Businesses
//! GET  /businesses                - List (sortable)
//! GET  /businesses/new            - Create form
//! POST /businesses                - Create, redirect to list
//! GET  /businesses/{id}/edit      - Edit form
//! POST /businesses/{id}           - Update, redirect to list
//! POST /businesses/{id}/delete    - Delete, redirect to list
//!
//! # Staff (scoped to a business via ?businessId=)
//! GET  /staff                     - Selection control, or scoped list
//! GET  /staff/new                 - Create form
//! POST /staff                     - Create, redirect to scoped list
//! GET  /staff/{id}/edit           - Edit form
//! POST /staff/{id}                - Update, redirect to scoped list
//! POST /staff/{id}/delete         - Delete, redirect to scoped list
//! ```
//!
//! Every mutation redirects back to its list page, which re-fetches the
//! collection - one uniform refresh strategy, so the table always matches
//! server state once the redirect lands.

pub mod auth;
pub mod businesses;
pub mod staff;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Redirect,
    routing::get,
};

use crate::state::AppState;

/// Option for a `<select>` control.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Create a new select option.
    #[must_use]
    pub fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.to_owned(),
            label: label.to_owned(),
            selected,
        }
    }
}

/// Build the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/", get(index))
        .merge(auth::router())
        .merge(businesses::router())
        .merge(staff::router())
}

/// The dashboard landing page is the businesses list.
async fn index() -> Redirect {
    Redirect::to("/businesses")
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the remote data service is reachable before returning OK.
/// Returns 503 Service Unavailable otherwise.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.api().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
