//! In-process mock of the remote JSON data service.
//!
//! Mirrors the behavior the dashboard depends on: flat `businesses`,
//! `staff`, and `users` collections, server-assigned identifiers, and an
//! equality filter on `businessId` for the staff collection. Business ids
//! are strings; staff and user ids are numbers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

/// Handle to the mock service's collections.
///
/// Cheap to clone; all clones share the same data.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    businesses: Mutex<Vec<Value>>,
    staff: Mutex<Vec<Value>>,
    users: Mutex<Vec<Value>>,
    next_business_id: AtomicI64,
    next_staff_id: AtomicI64,
    next_user_id: AtomicI64,
}

impl MockApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an ephemeral port and serve the mock; returns its base URL.
    pub async fn serve(&self) -> String {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock server error");
        });

        format!("http://{addr}")
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/users", get(list_users))
            .route("/businesses", get(list_businesses).post(create_business))
            .route(
                "/businesses/{id}",
                get(get_business).put(update_business).delete(delete_business),
            )
            .route("/staff", get(list_staff).post(create_staff))
            .route(
                "/staff/{id}",
                get(get_staff).put(update_staff).delete(delete_staff),
            )
            .with_state(self.clone())
    }

    /// Seed a login user; returns its id.
    pub fn seed_user(&self, email: &str, password: &str) -> i64 {
        let id = self.inner.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.users.lock().unwrap().push(json!({
            "id": id,
            "email": email,
            "password": password,
        }));
        id
    }

    /// Seed a business; returns its string id.
    pub fn seed_business(&self, name: &str, location: &str, business_type: &str) -> String {
        let id = (self.inner.next_business_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
        self.inner.businesses.lock().unwrap().push(json!({
            "id": id,
            "name": name,
            "location": location,
            "type": business_type,
        }));
        id
    }

    /// Seed a staff member; returns its numeric id.
    pub fn seed_staff(
        &self,
        business_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        position: &str,
        phone_number: Option<&str>,
    ) -> i64 {
        let id = self.inner.next_staff_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut record = json!({
            "id": id,
            "email": email,
            "firstName": first_name,
            "lastName": last_name,
            "position": position,
            "businessId": business_id,
        });
        if let Some(phone) = phone_number {
            record["phoneNumber"] = json!(phone);
        }
        self.inner.staff.lock().unwrap().push(record);
        id
    }

    /// Snapshot of the businesses collection.
    #[must_use]
    pub fn businesses(&self) -> Vec<Value> {
        self.inner.businesses.lock().unwrap().clone()
    }

    /// Snapshot of the staff collection.
    #[must_use]
    pub fn staff(&self) -> Vec<Value> {
        self.inner.staff.lock().unwrap().clone()
    }
}

async fn root() -> &'static str {
    "ok"
}

async fn list_users(State(api): State<MockApi>) -> Json<Value> {
    Json(Value::Array(api.inner.users.lock().unwrap().clone()))
}

async fn list_businesses(State(api): State<MockApi>) -> Json<Value> {
    Json(Value::Array(api.businesses()))
}

async fn create_business(
    State(api): State<MockApi>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = (api.inner.next_business_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
    body["id"] = json!(id);
    api.inner.businesses.lock().unwrap().push(body.clone());

    (StatusCode::CREATED, Json(body))
}

async fn get_business(
    State(api): State<MockApi>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    api.businesses()
        .into_iter()
        .find(|b| b["id"] == json!(id))
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_business(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    body["id"] = json!(id);

    let mut businesses = api.inner.businesses.lock().unwrap();
    let record = businesses
        .iter_mut()
        .find(|b| b["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *record = body.clone();

    Ok(Json(body))
}

async fn delete_business(State(api): State<MockApi>, Path(id): Path<String>) -> StatusCode {
    let mut businesses = api.inner.businesses.lock().unwrap();
    let before = businesses.len();
    businesses.retain(|b| b["id"] != json!(id));

    if businesses.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_staff(
    State(api): State<MockApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let staff = api.staff();
    let filtered = match query.get("businessId") {
        Some(business_id) => staff
            .into_iter()
            .filter(|s| s["businessId"] == json!(business_id))
            .collect(),
        None => staff,
    };

    Json(Value::Array(filtered))
}

async fn create_staff(
    State(api): State<MockApi>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = api.inner.next_staff_id.fetch_add(1, Ordering::SeqCst) + 1;
    body["id"] = json!(id);
    api.inner.staff.lock().unwrap().push(body.clone());

    (StatusCode::CREATED, Json(body))
}

async fn get_staff(
    State(api): State<MockApi>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    api.staff()
        .into_iter()
        .find(|s| s["id"] == json!(id))
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_staff(
    State(api): State<MockApi>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    body["id"] = json!(id);

    let mut staff = api.inner.staff.lock().unwrap();
    let record = staff
        .iter_mut()
        .find(|s| s["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *record = body.clone();

    Ok(Json(body))
}

async fn delete_staff(State(api): State<MockApi>, Path(id): Path<i64>) -> StatusCode {
    let mut staff = api.inner.staff.lock().unwrap();
    let before = staff.len();
    staff.retain(|s| s["id"] != json!(id));

    if staff.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
