//! Pagination and search parameters shared by list endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Pagination, search and ordering parameters.
///
/// `order_by` names the sort field; a leading `-` means descending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Filter {
    #[validate(range(min = 1))]
    pub page: i64,
    #[validate(range(min = 1))]
    pub per_page: i64,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub order_by: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            keyword: String::new(),
            order_by: String::new(),
        }
    }
}

impl Filter {
    /// Row offset of the first record on this page.
    ///
    /// Never negative. Out-of-range pages and sizes (which fail validation)
    /// are clamped instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.per_page.max(0))
    }

    /// Returns the sort field and whether the order is descending.
    ///
    /// Returns `None` when no ordering was requested.
    pub fn order(&self) -> Option<(&str, bool)> {
        match self.order_by.strip_prefix('-') {
            Some("") => None,
            Some(field) => Some((field, true)),
            None if self.order_by.is_empty() => None,
            None => Some((self.order_by.as_str(), false)),
        }
    }
}
