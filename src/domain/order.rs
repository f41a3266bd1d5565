use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Currency sent with every order; the relay only settles in rupees.
pub const ORDER_CURRENCY: &str = "INR";

/// Status literal a client must send to `/confirmPayment` to settle an order.
pub const PAYMENT_SUCCESS: &str = "SUCCESS";

pub const ORDER_ID_PREFIX: &str = "order_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// One checkout attempt as held by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub order_amount: f64,
    pub customer_details: CustomerDetails,
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(order_id: String, order_amount: f64, customer_details: CustomerDetails) -> Self {
        Self {
            order_id,
            order_amount,
            customer_details,
            purchased: false,
            created_at: Utc::now(),
        }
    }

    /// One-way transition; calling it on a purchased order changes nothing.
    pub fn mark_purchased(&mut self) {
        self.purchased = true;
    }
}

/// Time-ordered so ids from one process never repeat and sort by creation.
pub fn new_order_id() -> String {
    format!("{ORDER_ID_PREFIX}{}", Uuid::now_v7().simple())
}

/// Clients send loosely typed JSON, so fields are taken as they come and
/// checked in validation: the amount stays raw, and text fields accept numbers.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_amount: Option<Value>,
    #[serde(deserialize_with = "text_or_number")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub customer_email: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub customer_phone: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub customer_id: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "invalid type: {other}, expected a string or number"
        ))),
    }
}

/// Fields are echoed from the gateway reply as-is, so they stay untyped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_order_id: Option<Value>,
    pub payment_session_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<Value>,
}

/// Any value is accepted for either field; only the exact string `SUCCESS`
/// settles, and only a string id can match a ledger entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[serde(deserialize_with = "text_only")]
    pub order_id: String,
    #[serde(deserialize_with = "text_only")]
    pub status: String,
}

fn text_only<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl ConfirmPaymentRequest {
    pub fn is_success(&self) -> bool {
        self.status == PAYMENT_SUCCESS
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmPaymentResponse {
    pub message: String,
}

impl ConfirmPaymentResponse {
    pub fn confirmed() -> Self {
        Self {
            message: "Payment confirmed, cart updated.".to_string(),
        }
    }
}
