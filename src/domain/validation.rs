use crate::domain::order::{CreateOrderRequest, CustomerDetails};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("request body is not a usable JSON object: {0}")]
    MalformedBody(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("orderAmount must be a positive number")]
    InvalidAmount,
    #[error("customerEmail is not a valid email address")]
    InvalidEmail,
    #[error("customerPhone must be 3 to 15 digits with an optional leading +")]
    InvalidPhone,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedBody(_) => "MALFORMED_BODY",
            ValidationError::MissingField(_) => "MISSING_FIELD",
            ValidationError::InvalidAmount => "INVALID_AMOUNT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidPhone => "INVALID_PHONE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub order_amount: f64,
    pub customer: CustomerDetails,
}

pub fn validate_create_order(req: &CreateOrderRequest) -> Result<ValidatedOrder, ValidationError> {
    let order_amount = parse_amount(req.order_amount.as_ref())?;

    let customer_id = required(&req.customer_id, "customerId")?;
    let customer_name = required(&req.customer_name, "customerName")?;
    let customer_email = required(&req.customer_email, "customerEmail")?;
    let customer_phone = required(&req.customer_phone, "customerPhone")?;

    if !is_email(&customer_email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_phone(&customer_phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(ValidatedOrder {
        order_amount,
        customer: CustomerDetails {
            customer_id,
            customer_name,
            customer_email,
            customer_phone,
        },
    })
}

/// Numbers and numeric strings are both accepted, as JS clients send either.
fn parse_amount(value: Option<&Value>) -> Result<f64, ValidationError> {
    let amount = match value {
        None | Some(Value::Null) => return Err(ValidationError::MissingField("orderAmount")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match amount {
        Some(a) if a.is_finite() && a > 0.0 => Ok(a),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// Blank values count as missing; anything else is kept exactly as sent.
fn required(value: &Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn is_email(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

fn is_phone(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    (3..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
