//! In-process fake backend for integration tests
//!
//! Stores raw JSON records per resource and merges PUT bodies
//! field-by-field, so server-side contracts (assigned ids, preserved
//! fields on partial update, `{ "message": ... }` error bodies) are
//! observable from the client side.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

/// Route client-layer tracing through the test harness, once per
/// process. Controlled by `RUST_LOG`.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

#[derive(Default)]
struct Store {
    next_id: i64,
    records: HashMap<String, BTreeMap<i64, Value>>,
}

#[derive(Clone, Default)]
struct BackendState {
    store: Arc<Mutex<Store>>,
}

type ErrorResponse = (StatusCode, Json<Value>);

fn singular(resource: &str) -> &'static str {
    match resource {
        "rooms" => "Room",
        "bookings" => "Booking",
        "guests" => "Guest",
        "payments" => "Payment",
        "staff" => "Staff",
        _ => "Resource",
    }
}

fn not_found(resource: &str) -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{} not found", singular(resource)) })),
    )
}

async fn list(
    State(state): State<BackendState>,
    Path(resource): Path<String>,
) -> Json<Vec<Value>> {
    let store = state.store.lock().unwrap();
    let records = store
        .records
        .get(&resource)
        .map(|map| map.values().cloned().collect())
        .unwrap_or_default();
    Json(records)
}

async fn get_one(
    State(state): State<BackendState>,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<Json<Value>, ErrorResponse> {
    let store = state.store.lock().unwrap();
    store
        .records
        .get(&resource)
        .and_then(|map| map.get(&id))
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&resource))
}

async fn create(
    State(state): State<BackendState>,
    Path(resource): Path<String>,
    Json(mut payload): Json<Value>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut store = state.store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;

    let object = payload.as_object_mut().ok_or((
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Request body must be an object" })),
    ))?;
    object.insert("id".to_string(), json!(id));
    if resource == "bookings" {
        object.insert("bookingId".to_string(), json!(format!("BK-{id:04}")));
        object.insert("createdAt".to_string(), json!("2025-06-01T09:00:00Z"));
    }

    store
        .records
        .entry(resource)
        .or_default()
        .insert(id, payload.clone());
    Ok(Json(payload))
}

async fn update_one(
    State(state): State<BackendState>,
    Path((resource, id)): Path<(String, i64)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut store = state.store.lock().unwrap();
    let record = store
        .records
        .get_mut(&resource)
        .and_then(|map| map.get_mut(&id))
        .ok_or_else(|| not_found(&resource))?;

    // Field-by-field merge: omitted fields stay untouched
    if let (Some(target), Some(fields)) = (record.as_object_mut(), patch.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    Ok(Json(record.clone()))
}

async fn delete_one(
    State(state): State<BackendState>,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<StatusCode, ErrorResponse> {
    let mut store = state.store.lock().unwrap();
    store
        .records
        .get_mut(&resource)
        .and_then(|map| map.remove(&id))
        .map(|_| StatusCode::OK)
        .ok_or_else(|| not_found(&resource))
}

fn transition(state: &BackendState, id: i64, status: &str) -> Result<Json<Value>, ErrorResponse> {
    let mut store = state.store.lock().unwrap();
    let record = store
        .records
        .get_mut("bookings")
        .and_then(|map| map.get_mut(&id))
        .ok_or_else(|| not_found("bookings"))?;
    record["status"] = json!(status);
    Ok(Json(record.clone()))
}

async fn check_in(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ErrorResponse> {
    transition(&state, id, "checked-in")
}

async fn check_out(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ErrorResponse> {
    transition(&state, id, "checked-out")
}

/// Non-JSON error body; exercises the status-line fallback message
async fn unstable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "upstream exploded")
}

/// JSON error body without a `message` field
async fn message_less() -> ErrorResponse {
    (StatusCode::IM_A_TEAPOT, Json(json!({ "code": 42 })))
}

/// JSON error body with an empty `message`
async fn empty_message() -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": "" })))
}

/// Spawn the fake backend and return its base URL
pub async fn spawn_backend() -> String {
    init_tracing();
    let state = BackendState::default();
    let app = Router::new()
        .route("/unstable", get(unstable))
        .route("/message-less", get(message_less))
        .route("/empty-message", get(empty_message))
        .route("/bookings/{id}/check-in", post(check_in))
        .route("/bookings/{id}/check-out", post(check_out))
        .route("/{resource}", get(list).post(create))
        .route(
            "/{resource}/{id}",
            get(get_one).put(update_one).delete(delete_one),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("fake backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend serve");
    });
    format!("http://{addr}")
}
