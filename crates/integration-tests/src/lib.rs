//! Integration test harness for Venue Admin.
//!
//! Each test gets its own [`TestContext`]: a mock remote data service and
//! the dashboard itself, both bound to ephemeral ports in-process. The
//! reqwest client carries a cookie store, so a single login call is enough
//! to exercise the session-gated pages.
//!
//! ```rust,ignore
//! let ctx = TestContext::new().await;
//! ctx.login().await;
//! let resp = ctx.get("/businesses").await;
//! assert_eq!(resp.status(), 200);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

pub mod mock_api;

use venue_admin::config::AdminConfig;
use venue_admin::state::AppState;

use crate::mock_api::MockApi;

/// Default credentials seeded into the mock user collection.
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "secret123";

/// A running dashboard plus its mock remote service.
pub struct TestContext {
    /// Cookie-carrying HTTP client with redirects disabled, so tests can
    /// assert on the redirect responses themselves.
    pub client: reqwest::Client,
    /// Base URL of the dashboard under test.
    pub base_url: String,
    /// Handle to the mock remote service's collections.
    pub api: MockApi,
}

impl TestContext {
    /// Start the mock service and the dashboard, both on ephemeral ports.
    ///
    /// One user is pre-seeded with [`TEST_EMAIL`] / [`TEST_PASSWORD`].
    pub async fn new() -> Self {
        let api = MockApi::new();
        api.seed_user(TEST_EMAIL, TEST_PASSWORD);

        let api_url = api.serve().await;

        let config = AdminConfig {
            api_base_url: api_url,
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://127.0.0.1:0".to_owned(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let state = AppState::new(config).expect("Failed to create application state");
        let app = venue_admin::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            api,
        }
    }

    /// Absolute URL for a dashboard path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a dashboard path.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a urlencoded form to a dashboard path.
    pub async fn post_form<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        form: &T,
    ) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Log in with the seeded credentials, asserting the redirect.
    pub async fn login(&self) {
        let resp = self
            .post_form("/login", &[("email", TEST_EMAIL), ("password", TEST_PASSWORD)])
            .await;

        assert!(
            resp.status().is_redirection(),
            "Expected login redirect, got: {}",
            resp.status()
        );
    }
}
