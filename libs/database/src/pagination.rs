//! Offset-style paging translated into whole pages.
//!
//! Callers send `from` (index of the first wanted row) and `size`. The page is
//! `from / size` with integer division, so an offset that falls inside a page
//! snaps back to the start of that page.

use serde::{Deserialize, Serialize};

/// A resolved page of a listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Build from a raw `from` offset and page size
    ///
    /// Both values are validated at the HTTP edge (`from >= 0`, `size >= 1`);
    /// a zero size is clamped to one so the division is always defined.
    pub fn from_offset(from: u64, size: u64) -> Self {
        let size = size.max(1);
        Self {
            page: from / size,
            size,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rows to skip
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }

    /// Rows to return
    pub fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_offset(0, 10)
    }
}
