//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use super::rate_limit::RateLimiter;
use super::templates::PageRenderer;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Compiled page templates
    pub renderer: Arc<PageRenderer>,
    /// Bucket guarding the index route
    pub limiter: RateLimiter,
    /// Directory holding `page/`, `styles/`, `images/` and `javascript/`
    pub asset_root: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn FullRepository>,
        renderer: PageRenderer,
        limiter: RateLimiter,
        asset_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository,
            renderer: Arc::new(renderer),
            limiter,
            asset_root: Arc::new(asset_root.into()),
        }
    }

    pub fn page_dir(&self) -> PathBuf {
        self.asset_root.join("page")
    }

    pub fn asset_dir(&self, name: &str) -> PathBuf {
        self.asset_root.join(name)
    }
}
