//! In-memory repository for unit tests and local development.
//!
//! Mirrors the Postgres semantics closely enough for the handlers to be
//! exercised without a database: ids are assigned sequentially, deletes are
//! soft, and course listing applies the same predicates, ordering and
//! pagination.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::db::repository::{
    CourseRepository, FullRepository, RepositoryResult, UserRepository,
};
use crate::models::{Course, CourseSlice, NewUser, User, UserId};
use crate::services::course_query::{CourseQuery, SortField};

#[derive(Debug, Default)]
struct Tables {
    next_user_id: i64,
    users: BTreeMap<i64, User>,
    courses: Vec<Course>,
    /// course id -> category names
    course_categories: HashMap<i64, HashSet<String>>,
}

/// In-memory implementation of [`FullRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    tables: RwLock<Tables>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the course table contents.
    pub fn seed_courses(&self, courses: Vec<Course>) {
        self.tables.write().courses = courses;
    }

    /// Put a course in a named category.
    pub fn assign_category(&self, course_id: i64, category: impl Into<String>) {
        self.tables
            .write()
            .course_categories
            .entry(course_id)
            .or_default()
            .insert(category.into());
    }

    /// Number of stored accounts, soft-deleted ones included.
    pub fn user_row_count(&self) -> usize {
        self.tables.read().users.len()
    }
}

fn compare_courses(a: &Course, b: &Course, sort: SortField) -> Ordering {
    let primary = match sort {
        SortField::CourseName => a.course_name.cmp(&b.course_name),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::RecordedDate => a.recorded_date.cmp(&b.recorded_date),
    };
    primary.then(a.id.cmp(&b.id))
}

fn matches_query(course: &Course, query: &CourseQuery, tables: &Tables) -> bool {
    if let Some(ref needle) = query.name_contains_ci {
        if !course
            .course_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
        {
            return false;
        }
    }

    if let Some(ref needle) = query.name_contains {
        if !course.course_name.contains(needle.as_str()) {
            return false;
        }
    }

    if !query.categories.is_empty() {
        let in_category = tables
            .course_categories
            .get(&course.id)
            .is_some_and(|names| query.categories.iter().any(|c| names.contains(c)));
        if !in_category {
            return false;
        }
    }

    true
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn create_user(&self, user: NewUser) -> RepositoryResult<User> {
        let mut tables = self.tables.write();
        tables.next_user_id += 1;
        let now = Utc::now();
        let stored = User {
            id: UserId(tables.next_user_id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.users.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .users
            .get(&id.0)
            .filter(|u| !u.is_deleted())
            .cloned())
    }

    async fn update_user_name_by_id(&self, id: UserId, new_name: &str) -> RepositoryResult<usize> {
        let mut tables = self.tables.write();
        match tables.users.get_mut(&id.0).filter(|u| !u.is_deleted()) {
            Some(user) => {
                user.name = new_name.to_string();
                user.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user_by_id(&self, id: UserId) -> RepositoryResult<usize> {
        let mut tables = self.tables.write();
        match tables.users.get_mut(&id.0).filter(|u| !u.is_deleted()) {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get_all_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .filter(|u| !u.is_deleted())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CourseRepository for LocalRepository {
    async fn fetch_course_page(&self, query: &CourseQuery) -> RepositoryResult<CourseSlice> {
        let tables = self.tables.read();
        let mut matching: Vec<&Course> = tables
            .courses
            .iter()
            .filter(|c| matches_query(c, query, &tables))
            .collect();
        matching.sort_by(|a, b| compare_courses(a, b, query.sort));

        let total_count = matching.len() as i64;
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(0);

        Ok(CourseSlice {
            courses: matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect(),
            total_count,
        })
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::course_query::{compose, CourseListingParams};

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: "hash".to_string(),
        }
    }

    fn course(id: i64, name: &str) -> Course {
        Course {
            id,
            course_name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn user_crud_round_trip() {
        let repo = LocalRepository::new();
        let ada = repo.create_user(new_user("ada")).await.unwrap();
        let bob = repo.create_user(new_user("bob")).await.unwrap();
        assert_eq!(ada.id, UserId(1));
        assert_eq!(bob.id, UserId(2));

        assert_eq!(repo.update_user_name_by_id(ada.id, "Ada").await.unwrap(), 1);
        let fetched = repo.get_user_by_id(ada.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ada");
        assert!(fetched.updated_at >= fetched.created_at);

        assert_eq!(repo.delete_user_by_id(bob.id).await.unwrap(), 1);
        assert!(repo.get_user_by_id(bob.id).await.unwrap().is_none());
        assert_eq!(repo.get_all_users().await.unwrap().len(), 1);
        assert_eq!(repo.user_row_count(), 2);
    }

    #[tokio::test]
    async fn missing_user_touches_nothing() {
        let repo = LocalRepository::new();
        assert!(repo.get_user_by_id(UserId(9)).await.unwrap().is_none());
        assert_eq!(repo.update_user_name_by_id(UserId(9), "x").await.unwrap(), 0);
        assert_eq!(repo.delete_user_by_id(UserId(9)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn category_filter_matches_any_requested() {
        let repo = LocalRepository::new();
        repo.seed_courses(vec![course(1, "A"), course(2, "B"), course(3, "C")]);
        repo.assign_category(1, "math");
        repo.assign_category(2, "art");
        repo.assign_category(2, "math");

        let query = compose(&CourseListingParams {
            action: "filter".to_string(),
            categories: vec!["math".to_string(), "music".to_string()],
            ..Default::default()
        });
        let slice = repo.fetch_course_page(&query).await.unwrap();
        let ids: Vec<i64> = slice.courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(slice.total_count, 2);
    }

    #[tokio::test]
    async fn search_is_case_sensitive() {
        let repo = LocalRepository::new();
        repo.seed_courses(vec![course(1, "Rust basics"), course(2, "rusty tools")]);

        let query = compose(&CourseListingParams {
            action: "search".to_string(),
            search: "Rust".to_string(),
            ..Default::default()
        });
        let slice = repo.fetch_course_page(&query).await.unwrap();
        assert_eq!(slice.total_count, 1);
        assert_eq!(slice.courses[0].id, 1);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_but_counted() {
        let repo = LocalRepository::new();
        repo.seed_courses(vec![course(1, "A"), course(2, "B")]);

        let query = compose(&CourseListingParams {
            page: "5".to_string(),
            ..Default::default()
        });
        let slice = repo.fetch_course_page(&query).await.unwrap();
        assert!(slice.courses.is_empty());
        assert_eq!(slice.total_count, 2);
    }
}
