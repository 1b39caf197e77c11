//! Router fixtures over the shipped assets.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use courses_backend::db::repository::FullRepository;
use courses_backend::db::LocalRepository;
use courses_backend::http::{create_router, AppState, PageRenderer, RateLimiter};
use courses_backend::models::Course;

/// The crate directory, which holds the shipped `page/`, `styles/`,
/// `images/` and `javascript/` directories.
pub fn shipped_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A router over the shipped assets and the given repository.
pub fn app_with(repo: Arc<LocalRepository>) -> Router {
    app_with_assets(repo, &shipped_assets())
}

pub fn app_with_assets(repo: Arc<LocalRepository>, asset_root: &Path) -> Router {
    let renderer = PageRenderer::load(&asset_root.join("page")).unwrap();
    let repository: Arc<dyn FullRepository> = repo;
    let state = AppState::new(repository, renderer, RateLimiter::new(1.0, 3), asset_root);
    create_router(state)
}

pub fn course(id: i64, name: &str, price: f64, recorded_date: &str) -> Course {
    Course {
        id,
        course_name: name.to_string(),
        description: format!("About {}", name),
        price,
        sessions: 4,
        recorded_date: recorded_date.to_string(),
        total_users: 10,
    }
}

/// Four courses; names sort as Advanced, Cooking, Introduction, intro while
/// prices sort as Cooking, Introduction, intro, Advanced.
pub fn seeded_repo() -> Arc<LocalRepository> {
    let repo = Arc::new(LocalRepository::new());
    repo.seed_courses(vec![
        course(1, "Introduction to Rust", 30.0, "2024-03-01"),
        course(2, "Advanced SQL", 90.0, "2024-01-15"),
        course(3, "intro to Painting", 50.0, "2023-12-01"),
        course(4, "Cooking Basics", 20.0, "2024-02-10"),
    ]);
    repo
}

pub fn get(uri: &str) -> Request<Body> {
    request("GET", uri)
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Status and body of one request.
pub async fn fetch(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = send(app, request).await;
    let status = response.status();
    (status, body_string(response).await)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}
