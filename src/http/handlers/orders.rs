use crate::domain::order::{ConfirmPaymentRequest, CreateOrderRequest};
use crate::domain::validation::ValidationError;
use crate::error::OrderError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("unreadable create order body: {}", rejection.body_text());
            return OrderError::from(ValidationError::MalformedBody(rejection.body_text()))
                .into_response();
        }
    };

    match state.order_service.create_order(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// A body that cannot be read at all carries no success status, so it is
/// answered like any other unsuccessful confirmation.
pub async fn confirm_payment(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmPaymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("unreadable confirm payment body: {}", rejection.body_text());
            ConfirmPaymentRequest::default()
        }
    };

    match state.order_service.confirm_payment(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> impl IntoResponse {
    match state.order_service.get_order(&order_id).await {
        Ok(order) => (axum::http::StatusCode::OK, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}
