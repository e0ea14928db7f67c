//! The roll view: free-text filtering plus page navigation over a read-only
//! slice of voter records.

use log::debug;

use crate::model::{Pagination, PaginationResult, VoterRecord, PAGE_SIZE};

/// View state for a searchable, paginated roll: the current query and the
/// current 1-indexed page number. The record collection itself is borrowed
/// per call and never mutated.
///
/// Changing the query deliberately leaves the page number alone, matching
/// the tool's observed behavior: narrowing a search while deep in the
/// result set can land on an empty page until the user navigates back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollView {
    query: String,
    page_num: usize,
    page_size: usize,
}

impl Default for RollView {
    fn default() -> Self {
        Self::new()
    }
}

/// One renderable page of results, with the metadata the surrounding
/// chrome needs (result counter, "Page X of Y" footer, nav buttons).
#[derive(Debug)]
pub struct RollPage<'a> {
    pub records: Vec<&'a VoterRecord>,
    pub pagination: PaginationResult,
}

impl RollView {
    /// An empty query on page 1, with the standard page size.
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page_num: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query. The current page number is preserved.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn page_num(&self) -> usize {
        self.page_num
    }

    /// Jump straight to a page. Numbers below 1 are clamped to 1; numbers
    /// past the end simply yield an empty page.
    pub fn set_page(&mut self, page_num: usize) {
        self.page_num = page_num.max(1);
    }

    /// The matching records in their original order. A record matches iff
    /// the lowercased query is a substring of its haystack; the empty query
    /// matches everything.
    pub fn filter<'a>(&self, records: &'a [VoterRecord]) -> Vec<&'a VoterRecord> {
        if self.query.is_empty() {
            return records.iter().collect();
        }
        let needle = self.query.to_lowercase();
        records
            .iter()
            .filter(|record| record.haystack().contains(&needle))
            .collect()
    }

    /// Filter, then cut out the slice for the current page.
    pub fn page<'a>(&self, records: &'a [VoterRecord]) -> RollPage<'a> {
        let matches = self.filter(records);
        let pagination = Pagination::with_page_size(self.page_num, self.page_size);
        let page_records = pagination.slice(&matches).to_vec();
        let result = pagination.result(matches.len());
        debug!(
            "Roll query '{}': {} match(es), page {}/{}",
            self.query,
            result.total(),
            result.page_num(),
            result.total_pages(),
        );
        RollPage {
            records: page_records,
            pagination: result,
        }
    }

    /// Advance one page, clamped so the view never moves past the last
    /// page of the current result set (or below page 1 when it is empty).
    pub fn next_page(&mut self, records: &[VoterRecord]) {
        let total_pages = self.page(records).pagination.total_pages();
        self.page_num = (self.page_num + 1).min(total_pages.max(1));
    }

    /// Go back one page, clamped to page 1.
    pub fn prev_page(&mut self) {
        self.page_num = self.page_num.saturating_sub(1).max(1);
    }
}
