use serde::{Deserialize, Serialize};

/// One row of the `additional_courses` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub description: String,
    pub price: f64,
    pub sessions: i64,
    /// Stored as free-form text; ordering on it is lexicographic.
    pub recorded_date: String,
    pub total_users: i64,
}

/// A page of courses together with the number of rows matching the query
/// before pagination was applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSlice {
    pub courses: Vec<Course>,
    pub total_count: i64,
}

/// View model handed to the `courses.html` template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoursePage {
    pub courses: Vec<Course>,
    pub current_page: i64,
    pub total_pages: i64,
    pub filter: String,
    pub sort: String,
    pub search: String,
    pub action: String,
    pub categories: Vec<String>,
}
