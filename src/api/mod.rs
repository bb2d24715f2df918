mod create_order;
mod verify_payment;

use axum::{
    routing::{get, post},
    Router,
};

async fn api_status() -> &'static str {
    "Backend API working fine"
}

pub fn router(state: crate::AppState) -> Router {
    Router::new()
        .route("/", get(api_status))
        .route("/create-order", post(create_order::handler))
        .route("/verify-payment", post(verify_payment::handler))
        .with_state(state)
}
