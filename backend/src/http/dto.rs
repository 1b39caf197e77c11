//! JSON bodies for the machine-facing endpoints.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Database connectivity status
    pub database: String,
}
