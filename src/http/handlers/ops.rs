use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// Reports which gateway adapter the relay forwards orders to.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "gateway": state.order_service.gateway.name()
    }))
}

pub async fn liveness() -> Json<Value> {
    Json(json!({"alive": true}))
}
