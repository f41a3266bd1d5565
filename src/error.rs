use crate::domain::validation::ValidationError;
use crate::gateways::GatewayError;
use crate::repo::orders_repo::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid order request: {0}")]
    Validation(#[from] ValidationError),
    /// The gateway answered 2xx but did not open a payment session.
    #[error("Failed to create order")]
    Rejected(Value),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Order not found in cart.")]
    NotFound(String),
    #[error("Payment was not successful.")]
    PaymentNotSuccessful,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl OrderError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) | OrderError::Rejected(_) | OrderError::PaymentNotSuccessful => {
                StatusCode::BAD_REQUEST
            }
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::Gateway(_) | OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            OrderError::Validation(e) => (
                "Invalid order request",
                Some(json!({"code": e.code(), "message": e.to_string()})),
            ),
            OrderError::Rejected(body) => ("Failed to create order", Some(body.clone())),
            OrderError::Gateway(GatewayError::Upstream { body, .. }) => {
                ("Cashfree API Error", Some(body.clone()))
            }
            OrderError::Gateway(GatewayError::Transport(message)) => {
                ("Internal Server Error", Some(Value::String(message.clone())))
            }
            OrderError::Store(e) => ("Internal Server Error", Some(Value::String(e.to_string()))),
            OrderError::NotFound(_) => ("Order not found in cart.", None),
            OrderError::PaymentNotSuccessful => ("Payment was not successful.", None),
        };
        ErrorBody {
            error: error.to_string(),
            details,
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
