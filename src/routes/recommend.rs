use crate::models::responses::{ErrorResponse, RecommendRequest, RecommendResponse};
use crate::services::recommender::Recommender;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::info;

pub async fn recommend_books(
    State(recommender): State<Arc<Recommender>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (StatusCode, Json<ErrorResponse>)> {
    let book_name = match request.book_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No book name provided".to_string(),
                }),
            ))
        }
    };

    info!("Received book request for '{}'", book_name);

    let recommendations = recommender.get_similar_books(book_name).await;
    info!(
        "Generated {} recommendations for '{}'",
        recommendations.len(),
        book_name
    );

    Ok(Json(RecommendResponse {
        status: "success".to_string(),
        recommendations,
    }))
}
