//! Pagination parameters shared across all list endpoints.

use serde::{Deserialize, Serialize};

/// `page`/`limit` query parameters.
///
/// - `page`: at least 1, default 1
/// - `limit`: 1 to 100, default 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Clamp `limit` to 1..=100 and `page` to at least 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, 100),
        }
    }

    /// Row offset for the current page. Page 0 is treated as page 1.
    pub fn offset(self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }
}

/// Number of pages needed for `total` rows at `limit` per page.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 { 0 } else { total.div_ceil(limit) }
}
