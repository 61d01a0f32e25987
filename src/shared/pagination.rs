// src/shared/pagination.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A resolved, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Missing values fall back to page 1 and the default limit.
    /// The limit is clamped to `1..=max_limit`.
    pub fn resolve(&self, page: Option<u32>, limit: Option<u32>) -> PageRequest {
        let max_limit = self.max_limit.max(1);
        let limit = limit
            .unwrap_or(self.default_limit)
            .clamp(1, max_limit);

        PageRequest::new(page.unwrap_or(1), limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        let total_pages = total.div_ceil(u64::from(request.limit));

        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
            total_pages,
            has_next_page: u64::from(request.page) < total_pages,
            has_prev_page: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn page_request_never_goes_below_one() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 1);
    }

    #[test]
    fn resolve_applies_defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.resolve(None, None), PageRequest::new(1, 10));
    }

    #[test]
    fn resolve_clamps_limit_to_max() {
        let config = PaginationConfig {
            default_limit: 10,
            max_limit: 50,
        };
        assert_eq!(config.resolve(Some(2), Some(500)).limit, 50);
        assert_eq!(config.resolve(Some(2), Some(0)).limit, 1);
    }

    #[test]
    fn envelope_counts_pages() {
        let page = PageResult::new(vec![1, 2, 3, 4, 5], 25, PageRequest::new(2, 5));

        assert_eq!(page.total_pages, 5);
        assert!(page.has_next_page);
        assert!(page.has_prev_page);
        assert!(page.data.len() as u32 <= page.limit);
    }

    #[test]
    fn envelope_for_empty_result_has_no_pages() {
        let page: PageResult<u8> = PageResult::new(vec![], 0, PageRequest::default());

        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn page_past_the_end_is_empty_without_next() {
        let page: PageResult<u8> = PageResult::new(vec![], 3, PageRequest::new(4, 10));

        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn last_partial_page_has_no_next() {
        let page = PageResult::new(vec!['a'], 11, PageRequest::new(2, 10));

        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
    }
}
