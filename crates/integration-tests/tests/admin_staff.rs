//! Integration tests for staff management and its business scoping.

use reqwest::StatusCode;
use serde_json::json;

use venue_admin_integration_tests::TestContext;

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .expect("redirect without location header")
        .to_str()
        .expect("non-utf8 location header")
}

#[tokio::test]
async fn staff_without_a_scope_shows_the_business_selector() {
    let ctx = TestContext::new().await;
    ctx.api.seed_business("Joe Bar", "Main St", "bar");
    ctx.api.seed_business("Night Owl", "5th Ave", "club");
    ctx.login().await;

    let resp = ctx.get("/staff").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Select a business"));
    assert!(body.contains("Night Owl"));
}

#[tokio::test]
async fn scoped_list_only_shows_that_business() {
    let ctx = TestContext::new().await;
    let bar = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    let club = ctx.api.seed_business("Night Owl", "5th Ave", "club");
    ctx.api
        .seed_staff(&bar, "ana@example.com", "Ana", "Ortiz", "service", None);
    ctx.api
        .seed_staff(&club, "bo@example.com", "Bo", "Lind", "kitchen", Some("555-0101"));
    ctx.login().await;

    let body = ctx
        .get(&format!("/staff?businessId={bar}"))
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Ana Ortiz"));
    assert!(!body.contains("Bo Lind"));
    assert!(body.contains("Joe Bar"));
}

#[tokio::test]
async fn empty_scoped_list_renders_the_empty_state() {
    let ctx = TestContext::new().await;
    let id = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    ctx.login().await;

    let body = ctx
        .get(&format!("/staff?businessId={id}"))
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("No staff members found for this business."));
}

#[tokio::test]
async fn create_scopes_the_record_to_the_hidden_business_id() {
    let ctx = TestContext::new().await;
    let id = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    ctx.login().await;

    let resp = ctx
        .post_form(
            "/staff",
            &[
                ("email", "ana@example.com"),
                ("first_name", "Ana"),
                ("last_name", "Ortiz"),
                ("position", "PR"),
                ("phone_number", ""),
                ("business_id", id.as_str()),
            ],
        )
        .await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), format!("/staff?businessId={id}"));

    let staff = ctx.api.staff();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0]["firstName"], json!("Ana"));
    assert_eq!(staff[0]["position"], json!("PR"));
    assert_eq!(staff[0]["businessId"], json!(id));
    // Blank phone numbers are omitted, not stored as empty strings
    assert!(staff[0].get("phoneNumber").is_none());
}

#[tokio::test]
async fn create_with_invalid_fields_re_renders_the_form() {
    let ctx = TestContext::new().await;
    let id = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    ctx.login().await;

    let resp = ctx
        .post_form(
            "/staff",
            &[
                ("email", "not-an-email"),
                ("first_name", ""),
                ("last_name", "Ortiz"),
                ("position", "service"),
                ("phone_number", ""),
                ("business_id", id.as_str()),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("must contain an @ symbol"));
    assert!(body.contains("First name is required"));
    // The valid fields survive the round trip
    assert!(body.contains("Ortiz"));

    assert!(ctx.api.staff().is_empty());
}

#[tokio::test]
async fn new_form_without_a_scope_redirects_to_the_selector() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let resp = ctx.get("/staff/new").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/staff");
}

#[tokio::test]
async fn edit_form_is_prefilled_from_the_remote_record() {
    let ctx = TestContext::new().await;
    let business = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    let id = ctx.api.seed_staff(
        &business,
        "bo@example.com",
        "Bo",
        "Lind",
        "kitchen",
        Some("555-0101"),
    );
    ctx.login().await;

    let resp = ctx.get(&format!("/staff/{id}/edit")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("bo@example.com"));
    assert!(body.contains("555-0101"));
    assert!(body.contains("Edit Staff Member"));
}

#[tokio::test]
async fn update_replaces_the_record_and_returns_to_the_scoped_list() {
    let ctx = TestContext::new().await;
    let business = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    let id = ctx
        .api
        .seed_staff(&business, "bo@example.com", "Bo", "Lind", "kitchen", None);
    ctx.login().await;

    let resp = ctx
        .post_form(
            &format!("/staff/{id}"),
            &[
                ("email", "bo@example.com"),
                ("first_name", "Bo"),
                ("last_name", "Lindqvist"),
                ("position", "service"),
                ("phone_number", "555-0199"),
                ("business_id", business.as_str()),
            ],
        )
        .await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), format!("/staff?businessId={business}"));

    let staff = ctx.api.staff();
    assert_eq!(staff[0]["lastName"], json!("Lindqvist"));
    assert_eq!(staff[0]["position"], json!("service"));
    assert_eq!(staff[0]["phoneNumber"], json!("555-0199"));
}

#[tokio::test]
async fn delete_returns_to_the_scoped_list() {
    let ctx = TestContext::new().await;
    let business = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    let id = ctx
        .api
        .seed_staff(&business, "bo@example.com", "Bo", "Lind", "kitchen", None);
    ctx.login().await;

    let resp = ctx
        .post_form(
            &format!("/staff/{id}/delete?businessId={business}"),
            &[] as &[(&str, &str)],
        )
        .await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), format!("/staff?businessId={business}"));

    assert!(ctx.api.staff().is_empty());
}

#[tokio::test]
async fn scoped_list_sorts_by_email() {
    let ctx = TestContext::new().await;
    let business = ctx.api.seed_business("Joe Bar", "Main St", "bar");
    ctx.api
        .seed_staff(&business, "zoe@example.com", "Zoe", "Adams", "service", None);
    ctx.api
        .seed_staff(&business, "ana@example.com", "Ana", "Ortiz", "service", None);
    ctx.login().await;

    let body = ctx
        .get(&format!("/staff?businessId={business}&sort=email&dir=asc"))
        .await
        .text()
        .await
        .unwrap();
    let ana = body.find("ana@example.com").expect("ana missing");
    let zoe = body.find("zoe@example.com").expect("zoe missing");
    assert!(ana < zoe, "ascending email sort should put ana first");
}
