use serde::Serialize;

/// Number of records shown per roll page.
pub const PAGE_SIZE: usize = 15;

/// A 1-indexed window onto an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_num: usize,
    page_size: usize,
}

impl Pagination {
    /// A window of the default [`PAGE_SIZE`] onto the given page.
    /// Page numbers below 1 are clamped to 1.
    pub fn new(page_num: usize) -> Self {
        Self::with_page_size(page_num, PAGE_SIZE)
    }

    pub fn with_page_size(page_num: usize, page_size: usize) -> Self {
        Self {
            page_num: page_num.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_num(&self) -> usize {
        self.page_num
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based offset of the first record on this page. Saturates for
    /// page numbers far past any realistic roll size.
    pub fn skip(&self) -> usize {
        (self.page_num - 1).saturating_mul(self.page_size)
    }

    /// The sub-slice of `items` visible through this window, clamped to the
    /// available range. A page past the end is an empty slice, not an error.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn result(self, total: usize) -> PaginationResult {
        PaginationResult {
            page_num: self.page_num,
            page_size: self.page_size,
            total,
            total_pages: total.div_ceil(self.page_size),
        }
    }
}

/// Pagination metadata for a filtered result set.
///
/// `total_pages` is zero when there are no matches, so a rendered footer may
/// read "Page 1 of 0"; callers that dislike this can clamp at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationResult {
    page_num: usize,
    page_size: usize,
    total: usize,
    total_pages: usize,
}

impl PaginationResult {
    pub fn page_num(&self) -> usize {
        self.page_num
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of matching records across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a "next" control should be enabled on this page.
    pub fn has_next(&self) -> bool {
        self.page_num < self.total_pages
    }

    /// Whether a "previous" control should be enabled on this page.
    pub fn has_prev(&self) -> bool {
        self.page_num > 1
    }
}
