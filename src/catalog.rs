//! Catalog browsing.
//!
//! Paged listing of the problem catalog with fuzzy title search, difficulty
//! filtering, and per-user liked-only / completed-only views. Filtering is
//! pushed into the [`ProblemFilter`]; paging and totals are computed here,
//! which is fine at catalog scale.

use crate::error::RecommendError;
use crate::store::{ProblemFilter, ProblemStore};
use crate::types::{Difficulty, Problem, User};

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Which slice of the catalog a page request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogView {
    #[default]
    All,
    /// Only problems the user has liked. Requires a user.
    LikedOnly,
    /// Only problems the user has completed. Requires a user.
    CompletedOnly,
}

/// A catalog page request. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
    /// Fuzzy title query; blank strings are treated as no search.
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub view: CatalogView,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            search: None,
            difficulty: None,
            view: CatalogView::All,
        }
    }
}

/// One page of catalog results with pagination totals.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_problems: usize,
    pub problems: Vec<Problem>,
}

/// Fetch one catalog page.
///
/// The liked-only and completed-only views need `user`; asking for them
/// without one is refused as invalid input rather than answered with the
/// whole catalog.
pub async fn fetch_page<S: ProblemStore + ?Sized>(
    request: &PageRequest,
    user: Option<&User>,
    store: &S,
) -> Result<CatalogPage, RecommendError> {
    if request.page == 0 {
        return Err(RecommendError::InvalidInput("page numbers start at 1".into()));
    }
    if request.per_page == 0 {
        return Err(RecommendError::InvalidInput("page size must be positive".into()));
    }

    let include = match request.view {
        CatalogView::All => None,
        CatalogView::LikedOnly => {
            let user = user.ok_or_else(|| {
                RecommendError::InvalidInput("liked-only view requires a user".into())
            })?;
            Some(user.liked.iter().map(|r| r.problem_id.clone()).collect())
        }
        CatalogView::CompletedOnly => {
            let user = user.ok_or_else(|| {
                RecommendError::InvalidInput("completed-only view requires a user".into())
            })?;
            Some(user.completed.iter().map(|r| r.problem_id.clone()).collect())
        }
    };

    let filter = ProblemFilter {
        include,
        title_search: request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        difficulty: request.difficulty,
        ..ProblemFilter::default()
    };

    let matched = store.query(&filter).await?;
    let total_problems = matched.len();
    let total_pages = total_problems.div_ceil(request.per_page);

    let skip = (request.page - 1) * request.per_page;
    let problems = matched
        .into_iter()
        .skip(skip)
        .take(request.per_page)
        .collect();

    Ok(CatalogPage {
        page: request.page,
        total_pages,
        total_problems,
        problems,
    })
}
