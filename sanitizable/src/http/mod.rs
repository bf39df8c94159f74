//! Request pipeline and response envelopes for JSON APIs.
//!
//! The pipeline runs the same four steps for every incoming payload:
//! parse the body, sanitize it in place, validate it, and store it in the
//! request context for the handler. Host frameworks plug in through
//! [`RequestContext`]; [`RequestAdapter`] is an owned, framework-free
//! implementation.
//!
//! Every failure is reported as an [`Error`] envelope ready to be rendered.

mod context;
mod extract;
mod filter;
mod process;
mod response;

pub use context::{RequestAdapter, RequestContext};
pub use extract::{filter_data, parse, path_id, path_id_default, validate, validate_with};
pub use filter::Filter;
pub use process::{UpdateData, process_data, process_filter, process_path_id, process_update_data};
pub use response::{Data, Error, List, Meta, Success, to_list_response};

// =============================================================================
// Context keys and defaults
// =============================================================================

/// Context key for the id extracted from the path.
pub const PATH_ID_KEY: &str = "__path_id__";
/// Context key for the parsed, sanitized and validated request body.
pub const REQUEST_KEY: &str = "__request__";
/// Context key for pagination and search parameters.
pub const FILTER_KEY: &str = "__filter__";

/// Path parameter read by [`path_id_default`].
pub const DEFAULT_PATH_PARAM: &str = "id";
/// Page used when the query omits `page` or gives a value below 1.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the query omits `per_page` or gives a value below 1.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Error code used for every pipeline rejection.
pub const BAD_REQUEST: &str = "BAD_REQUEST";
