pub mod config;
pub mod domain {
    pub mod order;
    pub mod validation;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod orders;
    }
    pub mod middleware {
        pub mod cors;
    }
}
pub mod repo {
    pub mod orders_repo;
}
pub mod service {
    pub mod order_service;
}

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub order_service: service::order_service::OrderService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::ops::health))
        .route("/ops/liveness", get(http::handlers::ops::liveness))
        .route("/createOrder", post(http::handlers::orders::create_order))
        .route("/confirmPayment", post(http::handlers::orders::confirm_payment))
        .route("/orders/:order_id", get(http::handlers::orders::get_order))
        .layer(axum::middleware::from_fn(
            http::middleware::cors::allow_any_origin,
        ))
        .with_state(state)
}
