//! Common types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Page request for listing endpoints, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "Page size must be between 1 and 100"))]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: default_page(), per_page: default_per_page() }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Row limit, clamped to `MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page.clamp(1, MAX_PAGE_SIZE))
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * self.limit()
    }
}
