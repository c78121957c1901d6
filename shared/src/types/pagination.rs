//! Pagination related types for catalog list queries

use serde::{Deserialize, Serialize};

/// Pagination parameters for list queries
///
/// Page indexes are zero-based: page 0 is the first slice of the result
/// set. `per_page` is clamped to a sane range by [`Pagination::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page index (zero-based)
    #[serde(default)]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create pagination for a zero-based page index
    pub fn of(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Calculate the row offset for database queries
    pub fn offset(&self) -> u32 {
        self.page.saturating_mul(self.per_page)
    }

    /// Get the row limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Offset as i64 for SQL binds
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset())
    }

    /// Limit as i64 for SQL binds
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit())
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Clamp `per_page` into the supported range
    pub fn validate(mut self) -> Self {
        self.per_page = self.per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
        self
    }
}

/// One page of results plus the total match count
///
/// `total` counts matching rows across all pages so callers can compute
/// page counts client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on this page
    pub items: Vec<T>,

    /// Page index this slice corresponds to (zero-based)
    pub page: u32,

    /// Items per page used for the slice
    pub per_page: u32,

    /// Total number of matching rows across all pages
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let per_page = pagination.per_page.max(1);
        let total_pages = total.div_ceil(u64::from(per_page)) as u32;

        Self {
            items,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages,
        }
    }

    /// Create an empty paginated response
    pub fn empty(pagination: Pagination) -> Self {
        Self {
            items: Vec::new(),
            page: pagination.page,
            per_page: pagination.per_page,
            total: 0,
            total_pages: 0,
        }
    }

    /// Whether a page exists after this one
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Whether a page exists before this one
    pub fn has_prev(&self) -> bool {
        self.page > 0 && self.total_pages > 0
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Check if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

// Constants
const DEFAULT_PER_PAGE: u32 = 20;
const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 100;

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
