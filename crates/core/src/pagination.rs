//! Pagination

use thiserror::Error;

/// Page size used when none is requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// Rejected page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    /// Page numbers start at 1.
    #[error("page must be at least 1")]
    InvalidPage,

    /// Limit outside `1..=MAX_LIMIT`.
    #[error("limit must be between 1 and {MAX_LIMIT}")]
    InvalidLimit,
}

/// A validated page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate page parameters, applying defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] for a zero page or an out of range limit.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Result<Self, PageError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(PageError::InvalidPage);
        }

        if limit == 0 || limit > MAX_LIMIT {
            return Err(PageError::InvalidLimit);
        }

        Ok(Self { page, limit })
    }

    /// One-based page number.
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Page size.
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`.
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Position of a page within the full listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// One-based page number.
    pub page: u32,

    /// Page size.
    pub limit: u32,

    /// `ceil(total_records / limit)`.
    pub total_pages: u64,

    /// Records matching the filters across all pages.
    pub total_records: u64,
}

impl Pagination {
    /// Describe `request` within a listing of `total_records`.
    pub fn new(request: PageRequest, total_records: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total_pages: total_records.div_ceil(u64::from(request.limit)),
            total_records,
        }
    }
}
