//! Storage for user accounts and the course catalogue.
//!
//! Handlers only ever see the [`FullRepository`] trait object produced by the
//! [`RepositoryFactory`]; which backend sits behind it is decided once at
//! startup.
//!
//! ```text
//!   HTTP handlers / services
//!             │
//!   FullRepository (repository/)
//!             │
//!     ┌───────┴────────┐
//!   LocalRepository  PostgresRepository
//!    (in-memory)       (Diesel + r2d2)
//! ```
//!
//! ```ignore
//! use courses_backend::db::{RepositoryFactory, RepositoryType};
//!
//! let repo = RepositoryFactory::create(RepositoryType::Local, None).await?;
//! let users = repo.get_all_users().await?;
//! ```

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    CourseRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    UserRepository,
};
