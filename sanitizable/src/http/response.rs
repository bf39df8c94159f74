//! Response envelopes rendered by the host framework.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BAD_REQUEST, filter::Filter};

/// Free-form JSON object attached to success and error envelopes.
pub type Data = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Success responses
// =============================================================================

/// Pagination metadata for list responses.
///
/// `page` and `per_page` are omitted from JSON when zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub per_page: i64,
    pub total: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Meta {
    /// Builds metadata for one page of results described by `filter`.
    pub fn from_filter(filter: &Filter, total: i64) -> Self {
        Self {
            page: filter.page,
            per_page: filter.per_page,
            total,
        }
    }
}

/// One page of records with its metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    pub meta: Meta,
    pub data: Vec<T>,
}

impl<T> List<T> {
    pub fn new(meta: Meta, data: Vec<T>) -> Self {
        Self { meta, data }
    }
}

/// Generic success envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Success {
    pub message: String,
    #[serde(default)]
    pub data: Data,
}

impl Success {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Data::new(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }
}

/// Maps every record through `transform`, keeping order.
///
/// ```rust
/// use sanitizable::http::to_list_response;
///
/// let names = to_list_response(vec![(1, "ada"), (2, "alan")], |(_, name)| name.to_uppercase());
/// assert_eq!(names, ["ADA", "ALAN"]);
/// ```
pub fn to_list_response<T, R, F>(records: Vec<T>, transform: F) -> Vec<R>
where
    F: FnMut(T) -> R,
{
    records.into_iter().map(transform).collect()
}

// =============================================================================
// Error responses
// =============================================================================

/// Error envelope produced by every failing pipeline step.
///
/// `data` carries per-field details for validation failures and is empty
/// otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub data: Data,
}

impl Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Data::new(),
        }
    }

    /// Error with code `BAD_REQUEST`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(BAD_REQUEST, message)
    }

    #[must_use]
    pub fn with_data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}
