//! Integration tests for login, logout, and session gating.

use reqwest::StatusCode;

use venue_admin_integration_tests::{TEST_EMAIL, TEST_PASSWORD, TestContext};

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .expect("redirect without location header")
        .to_str()
        .expect("non-utf8 location header")
}

#[tokio::test]
async fn unauthenticated_pages_redirect_to_login() {
    let ctx = TestContext::new().await;

    for path in ["/businesses", "/businesses/new", "/staff", "/staff/new"] {
        let resp = ctx.get(path).await;
        assert!(
            resp.status().is_redirection(),
            "{path} should redirect, got: {}",
            resp.status()
        );
        assert_eq!(location(&resp), "/login", "{path} should bounce to login");
    }
}

#[tokio::test]
async fn health_endpoints_are_not_gated() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let resp = ctx.get("/health/ready").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_valid_credentials_starts_a_session() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .post_form("/login", &[("email", TEST_EMAIL), ("password", TEST_PASSWORD)])
        .await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/businesses");

    let resp = ctx.get("/businesses").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Businesses"));
    assert!(body.contains(TEST_EMAIL));
}

#[tokio::test]
async fn wrong_password_is_rejected_with_a_generic_message() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .post_form("/login", &[("email", TEST_EMAIL), ("password", "nope")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Invalid email or password"));
    // The entered email survives the round trip
    assert!(body.contains(TEST_EMAIL));

    // Still not logged in
    let resp = ctx.get("/businesses").await;
    assert!(resp.status().is_redirection());
}

#[tokio::test]
async fn unknown_email_gets_the_same_message_as_a_wrong_password() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .post_form("/login", &[("email", "ghost@example.com"), ("password", "x")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Invalid email or password"));
}

#[tokio::test]
async fn login_page_bounces_an_authenticated_user_to_the_dashboard() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let resp = ctx.get("/login").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/businesses");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let resp = ctx.post_form("/logout", &[] as &[(&str, &str)]).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/login");

    let resp = ctx.get("/businesses").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn root_redirects_to_the_businesses_list() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let resp = ctx.get("/").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/businesses");
}
