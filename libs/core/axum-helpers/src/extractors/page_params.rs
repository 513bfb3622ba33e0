//! `from`/`size` paging parameters shared by every listing endpoint.

use database::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

fn default_from() -> i64 {
    0
}

fn default_size() -> i64 {
    10
}

/// Paging query parameters, extracted with [`ValidatedQuery`](super::ValidatedQuery).
///
/// Other query fields on the same request are ignored, so endpoints with extra
/// filters extract them with a second `ValidatedQuery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Index of the first element wanted
    #[serde(default = "default_from")]
    #[validate(range(min = 0))]
    #[param(minimum = 0, default = 0)]
    pub from: i64,

    /// Number of elements per page
    #[serde(default = "default_size")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 10)]
    pub size: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            from: default_from(),
            size: default_size(),
        }
    }
}

impl PageParams {
    /// Resolve into a page; call only after validation.
    pub fn page(&self) -> PageRequest {
        PageRequest::from_offset(self.from.max(0) as u64, self.size.max(1) as u64)
    }
}
