#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use cashfree_relay::config::AppConfig;
use cashfree_relay::gateways::cashfree::CashfreeGateway;
use cashfree_relay::repo::orders_repo::InMemoryOrderStore;
use cashfree_relay::service::order_service::OrderService;
use cashfree_relay::AppState;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const APP_ID: &str = "test-app-id";
pub const SECRET_KEY: &str = "test-secret-key";

/// Records every order-creation call the stub receives.
#[derive(Clone, Default)]
pub struct StubCashfree {
    pub received: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

impl StubCashfree {
    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last(&self) -> (HeaderMap, Value) {
        self.received.lock().unwrap().last().cloned().unwrap()
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or("")
}

/// Replies are chosen by `customer_details.customer_id`.
async fn stub_create_order(
    State(stub): State<StubCashfree>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.received.lock().unwrap().push((headers.clone(), body.clone()));

    if header(&headers, "x-client-id") != APP_ID || header(&headers, "x-client-secret") != SECRET_KEY {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "message": "authentication Failed",
                "code": "request_failed",
                "type": "authentication_error"
            })),
        )
            .into_response();
    }

    match body["customer_details"]["customer_id"].as_str() {
        Some("no-session") => (
            StatusCode::OK,
            Json(json!({"order_id": body["order_id"], "order_status": "ACTIVE"})),
        )
            .into_response(),
        Some("gateway-down") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "internal error", "code": "internal_error"})),
        )
            .into_response(),
        Some("text-error") => (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response(),
        Some("slow") => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            (StatusCode::OK, Json(json!({}))).into_response()
        }
        _ => (
            StatusCode::OK,
            Json(json!({
                "order_id": body["order_id"],
                "cf_order_id": "cf_1",
                "payment_session_id": "session_1",
                "order_status": "ACTIVE",
                "customer_details": body["customer_details"]
            })),
        )
            .into_response(),
    }
}

/// Binds to port 0 and returns the base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn start_stub() -> (String, StubCashfree) {
    let stub = StubCashfree::default();
    let app = Router::new()
        .route("/pg/orders", post(stub_create_order))
        .with_state(stub.clone());
    let base = spawn(app).await;
    (format!("{base}/pg"), stub)
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/pg")
}

pub fn gateway_config(base_url: &str, app_id: &str, secret: &str, timeout_ms: Option<u64>) -> AppConfig {
    let mut cfg = AppConfig::from_lookup(|_| None);
    cfg.gateway_base_url = base_url.to_string();
    cfg.client_id = app_id.to_string();
    cfg.client_secret = secret.to_string();
    cfg.gateway_timeout_ms = timeout_ms;
    cfg
}

pub async fn start_relay(cfg: &AppConfig) -> (String, InMemoryOrderStore) {
    let store = InMemoryOrderStore::new();
    let state = AppState {
        order_service: OrderService::new(
            Arc::new(store.clone()),
            Arc::new(CashfreeGateway::from_config(cfg)),
        ),
    };
    let base = spawn(cashfree_relay::router(state)).await;
    (base, store)
}

pub fn order_body(customer_id: &str) -> Value {
    json!({
        "orderAmount": 100,
        "customerName": "A",
        "customerEmail": "a@x.com",
        "customerPhone": "123",
        "customerId": customer_id
    })
}
