//! Repository implementations.
//!
//! - `local`: in-memory tables for tests and local development
//! - `postgres`: Diesel over an r2d2 pool
#[cfg(feature = "local-repo")]
pub mod local;
#[cfg(feature = "postgres-repo")]
pub mod postgres;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use postgres::{PostgresConfig, PostgresRepository, DEFAULT_DATABASE_URL};
