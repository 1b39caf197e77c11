//! Router configuration for the site.
//!
//! Only the index route sits behind the rate limiter. Routes with a method
//! restriction answer other methods through [`handlers::method_not_allowed`].

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use super::handlers;
use super::rate_limit;
use super::state::AppState;

/// Directories served verbatim under a path prefix of the same name.
pub const STATIC_DIRS: [&str; 4] = ["styles", "images", "page", "javascript"];

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let index = get(handlers::index)
        .fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            rate_limit::enforce,
        ));

    let mut router = Router::new()
        .route("/", index)
        .route(
            "/submit",
            post(handlers::submit).fallback(handlers::method_not_allowed),
        )
        .route("/error", any(handlers::error_page))
        .route("/success", any(handlers::success_page))
        .route(
            "/additional-courses",
            get(handlers::courses).fallback(handlers::method_not_allowed),
        )
        .route(
            "/register",
            get(handlers::register_page)
                .post(handlers::submit)
                .fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check));

    for dir in STATIC_DIRS {
        router = router.nest_service(&format!("/{dir}"), ServeDir::new(state.asset_dir(dir)));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
