use crate::gateways::{GatewayError, GatewayOrderReply, GatewayOrderRequest, PaymentGateway};
use serde_json::json;
use std::sync::Mutex;

/// In-process stand-in for the gateway, driven by a behavior string.
pub struct MockGateway {
    pub behavior: String,
    requests: Mutex<Vec<GatewayOrderRequest>>,
}

impl MockGateway {
    pub fn new(behavior: &str) -> Self {
        Self {
            behavior: behavior.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GatewayOrderRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrderReply, GatewayError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }

        match self.behavior.as_str() {
            "MISSING_SESSION" => Ok(GatewayOrderReply {
                body: json!({
                    "order_id": request.order_id,
                    "order_status": "ACTIVE"
                }),
            }),
            "ALWAYS_FAILURE" => Err(GatewayError::Upstream {
                status: 400,
                body: json!({
                    "message": "order_amount : invalid value provided",
                    "code": "order_amount_invalid",
                    "type": "invalid_request_error"
                }),
            }),
            "NETWORK_ERROR" => Err(GatewayError::Transport("connection refused".to_string())),
            _ => Ok(GatewayOrderReply {
                body: json!({
                    "order_id": request.order_id,
                    "cf_order_id": format!("cf_{}", uuid::Uuid::new_v4().simple()),
                    "payment_session_id": format!("session_mock_{}", uuid::Uuid::new_v4().simple()),
                    "order_status": "ACTIVE",
                    "customer_details": request.customer_details
                }),
            }),
        }
    }
}
