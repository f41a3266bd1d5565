use crate::config::AppConfig;
use crate::gateways::{parse_body, GatewayError, GatewayOrderReply, GatewayOrderRequest, PaymentGateway};
use std::time::Duration;

pub struct CashfreeGateway {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub api_version: String,
    pub timeout: Option<Duration>,
    pub client: reqwest::Client,
}

impl CashfreeGateway {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            base_url: cfg.gateway_base_url.clone(),
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
            api_version: cfg.api_version.clone(),
            timeout: cfg.gateway_timeout_ms.map(Duration::from_millis),
            client: reqwest::Client::new(),
        }
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl PaymentGateway for CashfreeGateway {
    fn name(&self) -> &'static str {
        "cashfree"
    }

    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrderReply, GatewayError> {
        let mut req = self
            .client
            .post(self.orders_url())
            .header("x-client-id", &self.client_id)
            .header("x-client-secret", &self.client_secret)
            .header("x-api-version", &self.api_version)
            .json(request);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        let body = parse_body(&text);

        if status.is_success() {
            Ok(GatewayOrderReply { body })
        } else {
            Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Transport("gateway timeout".to_string())
    } else {
        GatewayError::Transport(e.to_string())
    }
}
