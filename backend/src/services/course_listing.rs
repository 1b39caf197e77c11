//! Course listing: compose the query, run it, and shape the page view.

use super::course_query::{compose, total_pages, CourseListingParams};
use crate::db::repository::{CourseRepository, RepositoryResult};
use crate::models::CoursePage;

/// Fetch one page of courses for the given request parameters.
pub async fn list_courses<R>(repo: &R, params: &CourseListingParams) -> RepositoryResult<CoursePage>
where
    R: CourseRepository + ?Sized,
{
    let query = compose(params);
    let slice = repo
        .fetch_course_page(&query)
        .await
        .map_err(|e| e.with_operation("list_courses"))?;

    Ok(CoursePage {
        courses: slice.courses,
        current_page: query.page,
        total_pages: total_pages(slice.total_count),
        filter: params.filter.clone(),
        sort: query.sort.as_str().to_string(),
        search: params.search.clone(),
        action: params.action.clone(),
        categories: query.categories,
    })
}

#[cfg(all(test, feature = "local-repo"))]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::Course;

    fn course(id: i64, name: &str, price: f64, recorded_date: &str) -> Course {
        Course {
            id,
            course_name: name.to_string(),
            price,
            recorded_date: recorded_date.to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> LocalRepository {
        let repo = LocalRepository::new();
        repo.seed_courses(vec![
            course(1, "Introduction to Rust", 30.0, "2024-03-01"),
            course(2, "Advanced SQL", 90.0, "2024-01-15"),
            course(3, "intro to Painting", 50.0, "2023-12-01"),
            course(4, "Cooking Basics", 20.0, "2024-02-10"),
        ]);
        repo
    }

    fn names(page: &CoursePage) -> Vec<&str> {
        page.courses.iter().map(|c| c.course_name.as_str()).collect()
    }

    #[tokio::test]
    async fn empty_store_has_no_pages() {
        let repo = LocalRepository::new();
        let page = list_courses(&repo, &CourseListingParams::default())
            .await
            .unwrap();
        assert!(page.courses.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn paginates_by_three() {
        let repo = seeded();
        let first = list_courses(&repo, &CourseListingParams::default())
            .await
            .unwrap();
        assert_eq!(first.total_pages, 2);
        assert_eq!(
            names(&first),
            ["Advanced SQL", "Cooking Basics", "Introduction to Rust"]
        );

        let second = list_courses(
            &repo,
            &CourseListingParams {
                page: "2".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(second.current_page, 2);
        assert_eq!(names(&second), ["intro to Painting"]);
    }

    #[tokio::test]
    async fn filter_is_case_insensitive() {
        let repo = seeded();
        let page = list_courses(
            &repo,
            &CourseListingParams {
                filter: "INTRO".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(names(&page), ["Introduction to Rust", "intro to Painting"]);
        assert_eq!(page.filter, "INTRO");
        assert_eq!(page.total_pages, 1);
    }

    async fn sorted_by(repo: &LocalRepository, sort: &str) -> CoursePage {
        list_courses(
            repo,
            &CourseListingParams {
                action: "sort".to_string(),
                sort: sort.to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn sort_by_price_under_sort_action() {
        let repo = seeded();
        let page = sorted_by(&repo, "price").await;
        assert_eq!(
            names(&page),
            ["Cooking Basics", "Introduction to Rust", "intro to Painting"]
        );
        assert_eq!(page.sort, "price");
    }

    #[tokio::test]
    async fn each_sort_column_orders_differently() {
        let repo = seeded();
        let by_name = sorted_by(&repo, "course_name").await;
        let by_price = sorted_by(&repo, "price").await;
        let by_date = sorted_by(&repo, "recorded_date").await;

        assert_eq!(
            names(&by_name),
            ["Advanced SQL", "Cooking Basics", "Introduction to Rust"]
        );
        assert_eq!(
            names(&by_date),
            ["intro to Painting", "Advanced SQL", "Cooking Basics"]
        );
        assert_ne!(names(&by_name), names(&by_price));
        assert_ne!(names(&by_price), names(&by_date));
    }
}
