//! Shared in-process mock backend for the integration tests.
//!
//! Binds a real axum server on an ephemeral port and records what arrives
//! (request count, auth header, content type, multipart fields and file
//! parts) so tests can assert on the wire-level behavior of the gateway and
//! services.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Everything the mock backend observed.
#[derive(Default)]
pub struct Recorded {
    hits: AtomicUsize,
    pub last_auth: Mutex<Option<String>>,
    pub last_content_type: Mutex<Option<String>>,
    /// Text fields of the last multipart request.
    pub last_fields: Mutex<serde_json::Map<String, Value>>,
    /// Field names of file parts in the last multipart request.
    pub last_files: Mutex<Vec<String>>,
    /// File names of file parts in the last multipart request.
    pub last_file_names: Mutex<Vec<String>>,
}

impl Recorded {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub type SharedState = Arc<Recorded>;

fn ok(result: Value) -> Json<Value> {
    Json(json!({ "code": 1000, "message": "OK", "result": result }))
}

fn record_headers(state: &Recorded, headers: &HeaderMap) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *state.last_content_type.lock().unwrap() = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
}

/// Drain a multipart body into the recorded state, returning the text
/// fields for handlers that echo them back.
async fn record_multipart(
    state: &Recorded,
    mut multipart: Multipart,
) -> serde_json::Map<String, Value> {
    let mut fields = serde_json::Map::new();
    let mut files = Vec::new();
    let mut file_names = Vec::new();

    while let Some(field) = multipart.next_field().await.expect("multipart read") {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(file_name) = field.file_name() {
            file_names.push(file_name.to_string());
            files.push(name);
            let _ = field.bytes().await.expect("file bytes");
        } else {
            let text = field.text().await.expect("field text");
            fields.insert(name, Value::String(text));
        }
    }

    *state.last_fields.lock().unwrap() = fields.clone();
    *state.last_files.lock().unwrap() = files;
    *state.last_file_names.lock().unwrap() = file_names;
    fields
}

async fn ping(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    record_headers(&state, &headers);
    ok(json!({ "pong": true }))
}

async fn echo_json(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record_headers(&state, &headers);
    ok(body)
}

async fn fail_http(State(state): State<SharedState>, headers: HeaderMap) -> (StatusCode, String) {
    record_headers(&state, &headers);
    (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())
}

async fn fail_app(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    record_headers(&state, &headers);
    Json(json!({ "code": 9001, "message": "Thao tác thất bại" }))
}

async fn no_data(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    record_headers(&state, &headers);
    Json(json!({ "code": 1000, "message": "OK" }))
}

async fn update_brand(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    record_headers(&state, &headers);
    let fields = record_multipart(&state, multipart).await;
    let brand_name = fields
        .get("brandName")
        .cloned()
        .unwrap_or_else(|| Value::String("Acer".into()));
    ok(json!({
        "id": id,
        "brandName": brand_name,
        "categoryId": "c1",
        "logoUrl": "https://cdn.techmart.vn/brands/acer.png",
    }))
}

async fn create_category(
    State(state): State<SharedState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    record_headers(&state, &headers);
    let fields = record_multipart(&state, multipart).await;
    ok(json!({
        "id": "c9",
        "categoryName": fields.get("categoryName").cloned().unwrap_or(Value::Null),
        "description": fields.get("description").cloned().unwrap_or(Value::Null),
        "iconUrl": "https://cdn.techmart.vn/categories/c9.png",
    }))
}

/// Uploads whose file name contains `"bad"` are rejected with an
/// application failure code; tests use that to simulate a partially failed
/// gallery upload.
async fn upload_image(
    State(state): State<SharedState>,
    Path(product_id): Path<String>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    record_headers(&state, &headers);
    let _ = record_multipart(&state, multipart).await;

    let rejected = state
        .last_file_names
        .lock()
        .unwrap()
        .iter()
        .any(|name| name.contains("bad"));
    if rejected {
        return Json(json!({ "code": 5000, "message": "Tải ảnh thất bại" }));
    }
    ok(json!({
        "id": format!("img-{}", state.hits()),
        "productId": product_id,
        "imageUrl": "https://cdn.techmart.vn/products/img.png",
        "isPrimary": false,
    }))
}

async fn login(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record_headers(&state, &headers);
    if body["password"] == "admin123" {
        ok(json!({
            "token": "header.payload.signature",
            "user": { "id": "u1", "username": body["username"], "role": "ADMIN" },
        }))
    } else {
        Json(json!({ "code": 4010, "message": "Sai tên đăng nhập hoặc mật khẩu" }))
    }
}

async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    record_headers(&state, &headers);
    Json(json!({ "code": 1000, "message": "OK" }))
}

/// Start the mock backend, returning its base URL and recorded state.
pub async fn spawn_backend() -> (String, SharedState) {
    let state: SharedState = Arc::new(Recorded::default());

    let app = Router::new()
        .route("/ping", get(ping))
        .route("/echo", post(echo_json))
        .route("/fail-http", get(fail_http))
        .route("/fail-app", get(fail_app))
        .route("/no-data", get(no_data))
        .route("/brands/{id}", put(update_brand))
        .route("/categories", post(create_category))
        .route("/products/{product_id}/images", post(upload_image))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    (format!("http://{addr}"), state)
}
