//! Single pipeline steps: read, parse and validate request input.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::{
    DEFAULT_PAGE, DEFAULT_PATH_PARAM, DEFAULT_PER_PAGE, context::RequestContext, filter::Filter,
    response::{Data, Error},
};

const INVALID_INPUT: &str = "Invalid input";

// =============================================================================
// Path data
// =============================================================================

/// Reads path parameter `name` as a positive integer id.
///
/// Missing, non-numeric and non-positive values fail with
/// `"{name} must be positive integer"`.
pub fn path_id<C>(ctx: &C, name: &str) -> Result<i64, Error>
where
    C: RequestContext + ?Sized,
{
    let raw = ctx.path_val(name);
    match raw.as_deref().and_then(|raw| raw.parse::<i64>().ok()) {
        Some(id) if id >= 1 => Ok(id),
        _ => {
            tracing::debug!(param = name, raw = ?raw, "rejecting path id");
            Err(Error::bad_request(format!("{name} must be positive integer")))
        }
    }
}

/// [`path_id`] for the `id` path parameter.
pub fn path_id_default<C>(ctx: &C) -> Result<i64, Error>
where
    C: RequestContext + ?Sized,
{
    path_id(ctx, DEFAULT_PATH_PARAM)
}

// =============================================================================
// Body data
// =============================================================================

/// Deserializes the request body into `T`.
///
/// A parse failure becomes an error whose message is the parser's message.
pub fn parse<T, C>(ctx: &mut C) -> Result<T, Error>
where
    T: DeserializeOwned,
    C: RequestContext,
{
    ctx.parse_body().map_err(|err| {
        tracing::debug!(error = %err, "rejecting request body");
        Error::bad_request(err.to_string())
    })
}

// =============================================================================
// Filters
// =============================================================================

/// Builds a [`Filter`] from the `page`, `per_page`, `keyword` and `order_by`
/// query parameters.
///
/// Pages below 1, or missing or non-numeric, fall back to the defaults.
pub fn filter_data<C>(ctx: &C) -> Filter
where
    C: RequestContext + ?Sized,
{
    let page = ctx.query_int("page").filter(|page| *page >= 1);
    let per_page = ctx.query_int("per_page").filter(|per_page| *per_page >= 1);
    Filter {
        page: page.unwrap_or(DEFAULT_PAGE),
        per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        keyword: ctx.query_str("keyword").unwrap_or_default(),
        order_by: ctx.query_str("order_by").unwrap_or_default(),
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Runs `validator` rules on `value`.
///
/// On failure the error message is `"Invalid input"` and `data` maps each
/// failing field to its messages. A rule without a custom message reports its
/// code (`"length"`, `"range"`, ...).
pub fn validate<T>(value: &T) -> Result<(), Error>
where
    T: Validate + ?Sized,
{
    validate_with(value, |_, _| None)
}

/// Like [`validate`], with a hook that supplies messages for rules that have
/// no custom message.
///
/// The hook receives the field path and the failing rule. Nested fields use
/// dotted paths (`address.city`) and list items use indices (`items[0].name`).
///
/// ```rust
/// use sanitizable::http::validate_with;
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(length(min = 3))]
///     name: String,
/// }
///
/// let err = validate_with(&Signup { name: "ab".into() }, |field, rule| {
///     (rule.code == "length").then(|| format!("{field} is too short"))
/// })
/// .unwrap_err();
///
/// assert_eq!(err.message, "Invalid input");
/// assert_eq!(err.data["name"], serde_json::json!(["name is too short"]));
/// ```
pub fn validate_with<T, F>(value: &T, msg_for: F) -> Result<(), Error>
where
    T: Validate + ?Sized,
    F: Fn(&str, &ValidationError) -> Option<String>,
{
    value.validate().map_err(|errors| {
        let mut data = Data::new();
        collect_messages(&errors, "", &msg_for, &mut data);
        tracing::debug!(fields = data.len(), "rejecting invalid input");
        Error::bad_request(INVALID_INPUT).with_data(data)
    })
}

fn collect_messages<F>(errors: &ValidationErrors, prefix: &str, msg_for: &F, data: &mut Data)
where
    F: Fn(&str, &ValidationError) -> Option<String>,
{
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{field}");
        match kind {
            ValidationErrorsKind::Field(rules) => {
                let messages = rules
                    .iter()
                    .map(|rule| Value::String(message_for(&path, rule, msg_for)))
                    .collect();
                data.insert(path, Value::Array(messages));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, &format!("{path}."), msg_for, data);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, &format!("{path}[{index}]."), msg_for, data);
                }
            }
        }
    }
}

fn message_for<F>(path: &str, rule: &ValidationError, msg_for: &F) -> String
where
    F: Fn(&str, &ValidationError) -> Option<String>,
{
    rule.message
        .as_ref()
        .map(ToString::to_string)
        .or_else(|| msg_for(path, rule))
        .unwrap_or_else(|| rule.code.to_string())
}
