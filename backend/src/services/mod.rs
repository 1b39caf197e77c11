//! Business logic sitting between the HTTP handlers and the repository.

pub mod course_listing;
pub mod course_query;
pub mod password;
pub mod registration;

pub use course_listing::list_courses;
pub use course_query::{compose, CourseListingParams, CourseQuery, SortField, PAGE_SIZE};
pub use registration::{register_user, RegistrationError, RegistrationForm};
