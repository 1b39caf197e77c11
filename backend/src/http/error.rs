//! HTTP error handling and response types.
//!
//! Responses are plain text and never carry internal detail; the full error
//! is logged instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::templates::TemplateError;
use crate::db::repository::RepositoryError;
use crate::services::RegistrationError;

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";
pub const RATE_LIMITED_BODY: &str = "Rate limit exceeded";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Repository(_)
            | AppError::Registration(_)
            | AppError::Template(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_BODY,
            AppError::RateLimited => RATE_LIMITED_BODY,
            AppError::Repository(ref e) => {
                error!(status = "failed", error = %e, context = %e.context(), "Repository error");
                INTERNAL_ERROR_BODY
            }
            AppError::Registration(ref e) => {
                error!(status = "failed", error = %e, "Registration error");
                INTERNAL_ERROR_BODY
            }
            AppError::Template(ref e) => {
                error!(status = "failed", error = %e, "Template rendering error");
                INTERNAL_ERROR_BODY
            }
            AppError::Internal(ref msg) => {
                error!(status = "failed", error = %msg, "Internal error");
                INTERNAL_ERROR_BODY
            }
        };

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ErrorContext;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn client_facing_bodies() {
        assert_eq!(
            body_of(AppError::MethodNotAllowed).await,
            (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
        );
        assert_eq!(
            body_of(AppError::RateLimited).await,
            (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded".to_string())
        );
    }

    #[tokio::test]
    async fn internal_detail_is_not_leaked() {
        let err = RepositoryError::connection_with_context(
            "password authentication failed for user postgres",
            ErrorContext::new("create_pool"),
        );
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal Server Error");
    }
}
