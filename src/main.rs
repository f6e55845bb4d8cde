mod api;
mod author;
mod budget;
pub mod schema;
pub mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use dotenvy::dotenv;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber;

use crate::api::handlers::{
    author::{add_author, get_author_by_id},
    budget::{add_budget_record, get_year_stats},
    health::health,
};
use utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    // Build router with all routes
    let router = Router::new()
        // Health check
        .route("/health", get(health))
        // Budget endpoints
        .route("/budget/add", post(add_budget_record))
        .route("/budget/year/:year/stats", get(get_year_stats))
        // Author endpoints
        .route("/author/add", post(add_author))
        .route("/author/:id", get(get_author_by_id))
        // Middleware layers before state binding
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting budget API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
