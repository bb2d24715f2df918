use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

mod api;
mod config;
mod err_responses;
mod razorpay;

const FRONTEND_DIST: &str = "frontend/dist";

#[derive(Clone)]
struct AppState {
    config: Arc<config::AppConfig>,
    razorpay: razorpay::Client,
}

async fn backend_status() -> &'static str {
    "Backend server is running"
}

fn app(state: AppState) -> Router {
    // Anything that is not an API route falls through to the SPA build,
    // with index.html standing in for client-side routes.
    let frontend = ServeDir::new(FRONTEND_DIST)
        .not_found_service(ServeFile::new(format!("{FRONTEND_DIST}/index.html")));

    Router::new()
        .route("/", get(backend_status))
        .nest("/api", api::router(state))
        .fallback_service(frontend)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Arc::new(config::AppConfig::from_env());
    let razorpay = razorpay::Client::new(&config);
    let port = config.port;

    let router = app(AppState { config, razorpay });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listening port");
    tracing::info!("server running on port {port}");
    axum::serve(listener, router)
        .await
        .expect("server exited with an error");
}
