use crate::domain::order::{CustomerDetails, ORDER_CURRENCY};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod cashfree;
/// Test double for service tests.
#[cfg(test)]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayCustomer {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// Order-creation payload in the gateway's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayOrderRequest {
    pub order_id: String,
    pub order_amount: f64,
    pub order_currency: String,
    pub customer_details: GatewayCustomer,
}

impl GatewayOrderRequest {
    pub fn new(order_id: &str, order_amount: f64, customer: &CustomerDetails) -> Self {
        Self {
            order_id: order_id.to_string(),
            order_amount,
            order_currency: ORDER_CURRENCY.to_string(),
            customer_details: GatewayCustomer {
                customer_id: customer.customer_id.clone(),
                customer_name: customer.customer_name.clone(),
                customer_email: customer.customer_email.clone(),
                customer_phone: customer.customer_phone.clone(),
            },
        }
    }
}

/// A 2xx reply from the gateway. The body is kept whole because callers echo it.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOrderReply {
    pub body: Value,
}

impl GatewayOrderReply {
    /// Present only when the gateway actually opened a payment session.
    pub fn payment_session_id(&self) -> Option<&Value> {
        match self.body.get("payment_session_id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(v) => Some(v),
        }
    }

    pub fn field(&self, key: &str) -> Option<Value> {
        self.body.get(key).filter(|v| !v.is_null()).cloned()
    }
}

#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The gateway answered, but with a non-2xx status.
    #[error("gateway responded with HTTP {status}")]
    Upstream { status: u16, body: Value },
    /// No usable answer: connect failure, timeout, broken body.
    #[error("{0}")]
    Transport(String),
}

/// Parses a reply body as JSON, falling back to the raw text.
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrderReply, GatewayError>;
}
