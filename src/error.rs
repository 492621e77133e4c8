use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::models::ErrorReply;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never settled, or its body could not be parsed as JSON.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service replied, but with an error payload instead of an answer.
    #[error("{0}")]
    Service(String),

    #[error("answer engine error: {0}")]
    Engine(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Transport(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Service(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Engine(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorReply {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
