use crate::views::{ErrorTemplate, NotFoundTemplate};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let rendered = match &self {
            AppError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                NotFoundTemplate::new().render()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("{}", msg);
                ErrorTemplate::new("400", msg).render()
            }
            AppError::Internal(_) | AppError::Render(_) => {
                tracing::error!("{}", self);
                ErrorTemplate::new("500", "Something went wrong.").render()
            }
        };

        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match rendered {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, self.to_string()).into_response()
            }
        }
    }
}
