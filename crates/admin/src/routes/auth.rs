//! Authentication route handlers.
//!
//! Login matches credentials against the remote user collection; a miss
//! renders a single generic rejection so the page never confirms which
//! credential was wrong.

use askama::Template;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::services;
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate {
    /// Message shown above the form; empty when there is nothing to say.
    error: String,
    /// Previously entered email, preserved across a failed attempt.
    email: String,
}

/// Login form submission.
#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

fn render_login(error: &str, email: &str) -> Html<String> {
    let template = LoginPageTemplate {
        error: error.to_owned(),
        email: email.to_owned(),
    };
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_owned()
    }))
}

/// Render the login page.
///
/// GET /login
async fn login_page(OptionalAuth(user): OptionalAuth) -> Response {
    if user.is_some() {
        return Redirect::to("/businesses").into_response();
    }
    render_login("", "").into_response()
}

/// Authenticate and start a session.
///
/// POST /login
#[instrument(skip(state, session, form))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    let email = form.email.trim();

    match services::auth::authenticate(state.api(), email, &form.password).await {
        Ok(Some(user)) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to persist session: {e}");
                return render_login("Unable to log in right now", email).into_response();
            }
            Redirect::to("/businesses").into_response()
        }
        Ok(None) => render_login("Invalid email or password", email).into_response(),
        Err(e) => {
            tracing::error!("Login lookup failed: {e}");
            render_login("Unable to log in right now", email).into_response()
        }
    }
}

/// Logout and clear the session.
///
/// POST /logout
async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    Redirect::to("/login")
}
