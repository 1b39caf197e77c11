//! Course listing query composition.
//!
//! Request parameters are parsed once into [`CourseListingParams`] and then
//! turned into a storage-agnostic [`CourseQuery`] by [`compose`]. Nothing in
//! here knows about HTTP or SQL.

use serde::{Deserialize, Serialize};

/// Number of courses shown per listing page.
pub const PAGE_SIZE: i64 = 3;

/// Columns a listing may be ordered by.
///
/// This is the only route from the `sort` request parameter to an ORDER BY
/// clause; unknown values collapse to [`SortField::CourseName`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CourseName,
    Price,
    RecordedDate,
}

impl SortField {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price" => SortField::Price,
            "recorded_date" => SortField::RecordedDate,
            _ => SortField::CourseName,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CourseName => "course_name",
            SortField::Price => "price",
            SortField::RecordedDate => "recorded_date",
        }
    }
}

/// The mutually exclusive query-shaping branches selected by `action`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingAction {
    #[default]
    None,
    /// Restrict to courses in any of the requested categories.
    Filter,
    /// Order by the requested sort field.
    Sort,
    /// Case-sensitive substring match using the `search` parameter.
    Search,
}

impl ListingAction {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "filter" => ListingAction::Filter,
            "sort" => ListingAction::Sort,
            "search" => ListingAction::Search,
            _ => ListingAction::None,
        }
    }
}

/// Raw course listing parameters as they arrived on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseListingParams {
    pub filter: String,
    pub sort: String,
    pub action: String,
    pub categories: Vec<String>,
    pub search: String,
    pub page: String,
}

impl CourseListingParams {
    /// Build parameters from decoded key/value pairs.
    ///
    /// `categories` may repeat and accumulates; for every other key the first
    /// occurrence wins. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        let mut seen: Vec<&'static str> = Vec::new();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "categories" => {
                    params.categories.push(value.into());
                    continue;
                }
                "filter" => ("filter", &mut params.filter),
                "sort" => ("sort", &mut params.sort),
                "action" => ("action", &mut params.action),
                "search" => ("search", &mut params.search),
                "page" => ("page", &mut params.page),
                _ => continue,
            };

            if !seen.contains(&slot.0) {
                seen.push(slot.0);
                *slot.1 = value.into();
            }
        }

        params
    }
}

/// Parse a 1-based page number; anything non-numeric or below 1 becomes 1.
pub fn parse_page(raw: &str) -> i64 {
    raw.parse::<i64>().ok().filter(|page| *page >= 1).unwrap_or(1)
}

/// `ceil(total_count / PAGE_SIZE)`, with zero rows giving zero pages.
pub fn total_pages(total_count: i64) -> i64 {
    if total_count <= 0 {
        return 0;
    }
    total_count / PAGE_SIZE + i64::from(total_count % PAGE_SIZE != 0)
}

/// Storage-agnostic description of one listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseQuery {
    /// Case-insensitive substring the course name must contain.
    pub name_contains_ci: Option<String>,
    /// Case-sensitive substring the course name must contain.
    pub name_contains: Option<String>,
    /// When non-empty, the course must belong to at least one of these
    /// category names.
    pub categories: Vec<String>,
    pub sort: SortField,
    /// 1-based page this query was built for.
    pub page: i64,
    pub offset: i64,
    pub limit: i64,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            name_contains_ci: None,
            name_contains: None,
            categories: Vec::new(),
            sort: SortField::CourseName,
            page: 1,
            offset: 0,
            limit: PAGE_SIZE,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Turn request parameters into a query specification.
///
/// `filter` always applies. `action` then adds at most one of: category
/// membership, the sort field, or the `search` substring. Both substring
/// predicates, when present, must hold. The sort column is resolved through
/// [`SortField::parse`] regardless of `action`, so ordering stays stable
/// across the branches.
pub fn compose(params: &CourseListingParams) -> CourseQuery {
    let page = parse_page(&params.page);
    let action = ListingAction::parse(&params.action);

    let categories = match action {
        ListingAction::Filter => params
            .categories
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    let name_contains = match action {
        ListingAction::Search => non_empty(&params.search),
        _ => None,
    };

    CourseQuery {
        name_contains_ci: non_empty(&params.filter),
        name_contains,
        categories,
        sort: SortField::parse(&params.sort),
        page,
        offset: (page - 1).saturating_mul(PAGE_SIZE),
        limit: PAGE_SIZE,
    }
}
