use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use recommendation_service::config::AppConfig;
use recommendation_service::routes::{health::health_check, recommend::recommend_books};
use recommendation_service::services::openlibrary::OpenLibraryClient;
use recommendation_service::services::recommender::{Provider, Recommender};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("recommendation_service=info,tower_http=info")
        .init();

    let config = AppConfig::from_env();
    info!("Using catalog at {}", config.openlibrary_url);

    let provider: Provider = Arc::new(OpenLibraryClient::new(&config));
    let recommender = Arc::new(Recommender::new(provider));

    let app = Router::new()
        .route("/status", get(health_check))
        .route("/api/webhook", post(recommend_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(recommender);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Recommendation service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
