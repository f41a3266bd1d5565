use cashfree_relay::config::AppConfig;
use cashfree_relay::gateways::cashfree::CashfreeGateway;
use cashfree_relay::repo::orders_repo::InMemoryOrderStore;
use cashfree_relay::service::order_service::OrderService;
use cashfree_relay::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    if !cfg.has_credentials() {
        tracing::warn!("APP_ID or SECRET_KEY is not set; gateway calls will fail authentication");
    }

    let gateway = Arc::new(CashfreeGateway::from_config(&cfg));
    let store = Arc::new(InMemoryOrderStore::new());

    let state = AppState {
        order_service: OrderService::new(store, gateway),
    };
    let app = cashfree_relay::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
