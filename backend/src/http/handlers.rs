//! HTTP handlers for the site.
//!
//! Each handler translates one request into service calls and the result
//! into a page, a redirect or an [`AppError`].

use axum::{
    extract::{rejection::FormRejection, Form, RawQuery, State},
    http::{Method, Uri},
    response::{Html, Redirect},
    Json,
};
use tracing::{info, warn};

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::services::{
    list_courses, register_user, CourseListingParams, RegistrationError, RegistrationForm,
};

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for page handlers.
pub type PageResult = Result<Html<String>, AppError>;

pub const ERROR_PATH: &str = "/error";
pub const SUCCESS_PATH: &str = "/success";

async fn send_page(state: &AppState, name: &str) -> PageResult {
    let path = state.page_dir().join(name);
    tokio::fs::read_to_string(&path)
        .await
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to read {}: {}", path.display(), e)))
}

// =============================================================================
// Static pages
// =============================================================================

/// GET /
pub async fn index(State(state): State<AppState>) -> PageResult {
    send_page(&state, "index.html").await
}

/// Any method on /error.
pub async fn error_page(State(state): State<AppState>) -> PageResult {
    send_page(&state, "error.html").await
}

/// Any method on /success.
pub async fn success_page(State(state): State<AppState>) -> PageResult {
    send_page(&state, "success.html").await
}

/// GET /register
pub async fn register_page(State(state): State<AppState>) -> PageResult {
    send_page(&state, "register.html").await
}

// =============================================================================
// Registration
// =============================================================================

/// POST /submit (and POST /register)
///
/// An empty or unreadable form redirects to the error page without touching
/// storage; a stored account redirects to the success page. Both use 303.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(action = "user_created", status = "rejected", error = %rejection, "Unreadable registration form");
            return Ok(Redirect::to(ERROR_PATH));
        }
    };

    match register_user(state.repository.as_ref(), form).await {
        Ok(_) => Ok(Redirect::to(SUCCESS_PATH)),
        Err(RegistrationError::MissingField(field)) => {
            warn!(action = "user_created", status = "invalid", field, "Missing registration field");
            Ok(Redirect::to(ERROR_PATH))
        }
        Err(e) => {
            warn!(action = "user_created", status = "failed", "Failed to create user");
            Err(e.into())
        }
    }
}

// =============================================================================
// Course listing
// =============================================================================

/// GET /additional-courses?filter=&sort=&page=&action=&categories=&search=
pub async fn courses(State(state): State<AppState>, RawQuery(query): RawQuery) -> PageResult {
    let raw = query.unwrap_or_default();
    let params = CourseListingParams::from_pairs(form_urlencoded::parse(raw.as_bytes()));

    let page = list_courses(state.repository.as_ref(), &params).await?;
    let html = state.renderer.render_courses(&page)?;

    info!(
        action = "list_courses",
        status = "success",
        page = page.current_page,
        total_pages = page.total_pages,
        shown = page.courses.len(),
        "Rendered course listing"
    );
    Ok(Html(html))
}

// =============================================================================
// Health / fallbacks
// =============================================================================

/// GET /health
///
/// Reports whether the repository answers. The status code is always 200;
/// repository state is in the body.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => {
            warn!(action = "health_check", status = "failed", error = %e, "Repository health check failed");
            "error".to_string()
        }
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }))
}

/// Fallback for methods a route does not accept.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    warn!(action = "route", status = "method_not_allowed", method = %method, path = %uri.path(), "Method not allowed");
    AppError::MethodNotAllowed
}
