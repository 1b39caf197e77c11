//! Repository traits for persistence backends.
//!
//! The traits are split by entity; [`FullRepository`] is what the HTTP layer
//! holds on to.

use async_trait::async_trait;

pub mod course;
pub mod error;
pub mod user;

pub use course::CourseRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use user::UserRepository;

/// Every storage backend implements both entity repositories plus a
/// connectivity probe.
#[async_trait]
pub trait FullRepository: UserRepository + CourseRepository {
    /// Check that the backing store answers.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
