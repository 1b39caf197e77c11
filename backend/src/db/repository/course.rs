//! Course listing repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::CourseSlice;
use crate::services::course_query::CourseQuery;

/// Read-only access to the `additional_courses` table.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Run a composed course query.
    ///
    /// `total_count` in the result counts every row matching the predicates
    /// of `query`, ignoring its offset and limit.
    async fn fetch_course_page(&self, query: &CourseQuery) -> RepositoryResult<CourseSlice>;
}
