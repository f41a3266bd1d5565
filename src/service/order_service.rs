use crate::domain::order::{
    new_order_id, ConfirmPaymentRequest, ConfirmPaymentResponse, CreateOrderRequest,
    CreateOrderResponse, OrderRecord,
};
use crate::domain::validation::validate_create_order;
use crate::error::OrderError;
use crate::gateways::{GatewayError, GatewayOrderRequest, PaymentGateway};
use crate::repo::orders_repo::OrderStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pub store: Arc<dyn OrderStore>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { store, gateway }
    }

    /// Opens an order at the gateway and records it locally once a payment
    /// session exists. Nothing is recorded on any failure path.
    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, OrderError> {
        tracing::info!(
            order_amount = ?req.order_amount,
            customer_id = ?req.customer_id,
            customer_name = ?req.customer_name,
            customer_email = ?req.customer_email,
            customer_phone = ?req.customer_phone,
            "create order request"
        );

        let order = validate_create_order(&req).map_err(|e| {
            tracing::warn!(code = e.code(), "rejected create order request: {e}");
            OrderError::from(e)
        })?;

        let order_id = new_order_id();
        let gateway_request = GatewayOrderRequest::new(&order_id, order.order_amount, &order.customer);

        let reply = match self.gateway.create_order(&gateway_request).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    GatewayError::Upstream { status, body } => tracing::error!(
                        gateway = self.gateway.name(),
                        %order_id,
                        status,
                        details = %body,
                        "gateway order creation failed"
                    ),
                    GatewayError::Transport(message) => tracing::error!(
                        gateway = self.gateway.name(),
                        %order_id,
                        "gateway unreachable: {message}"
                    ),
                }
                return Err(e.into());
            }
        };
        tracing::debug!(gateway = self.gateway.name(), %order_id, body = %reply.body, "gateway reply");

        let Some(payment_session_id) = reply.payment_session_id().cloned() else {
            tracing::warn!(%order_id, body = %reply.body, "gateway reply has no payment session");
            return Err(OrderError::Rejected(reply.body));
        };

        self.store
            .insert(OrderRecord::new(order_id.clone(), order.order_amount, order.customer))
            .await?;
        tracing::info!(%order_id, "order recorded");

        Ok(CreateOrderResponse {
            order_id: reply.field("order_id"),
            cf_order_id: reply.field("cf_order_id"),
            payment_session_id,
            customer_details: reply.field("customer_details"),
        })
    }

    /// Settles an order. A non-success status is refused before the ledger is consulted.
    pub async fn confirm_payment(
        &self,
        req: ConfirmPaymentRequest,
    ) -> Result<ConfirmPaymentResponse, OrderError> {
        if !req.is_success() {
            tracing::warn!(order_id = %req.order_id, status = %req.status, "payment not successful");
            return Err(OrderError::PaymentNotSuccessful);
        }

        if !self.store.mark_purchased(&req.order_id).await? {
            tracing::warn!(order_id = %req.order_id, "confirmation for unknown order");
            return Err(OrderError::NotFound(req.order_id));
        }

        tracing::info!(order_id = %req.order_id, "payment confirmed");
        Ok(ConfirmPaymentResponse::confirmed())
    }

    pub async fn get_order(&self, order_id: &str) -> Result<OrderRecord, OrderError> {
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}
