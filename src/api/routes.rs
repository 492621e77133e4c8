use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;
use crate::api::models::{AskRequest, ErrorReply};

pub const FIELDS_REQUIRED: &str = "Both 'video_id' and 'user_question' are required.";
pub const INTERNAL_ERROR: &str = "An internal error occurred.";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn process_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    if req.video_id.trim().is_empty() || req.user_question.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: FIELDS_REQUIRED.to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(video_id = %req.video_id, "processing question");

    match state.engine.answer(&req.video_id, &req.user_question).await {
        Ok(answer) => {
            tracing::info!(video_id = %req.video_id, start = answer.start, "answer generated");
            Json(answer).into_response()
        }
        Err(err) => {
            // Internal detail stays in the log; the caller gets a fixed message.
            tracing::error!(video_id = %req.video_id, error = %err, "answer engine failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReply {
                    error: INTERNAL_ERROR.to_string(),
                }),
            )
                .into_response()
        }
    }
}
