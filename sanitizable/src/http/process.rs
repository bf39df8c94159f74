//! Full pipeline steps that store their result in the request context.
//!
//! Each step stops at the first failure and returns the [`Error`] envelope;
//! nothing is stored in that case.

use std::any::Any;

use serde::de::DeserializeOwned;
use validator::Validate;

use super::{
    FILTER_KEY, PATH_ID_KEY, REQUEST_KEY,
    context::RequestContext,
    extract::{filter_data, parse, path_id_default, validate},
    response::Error,
};
use crate::traversal::{SanitizableWithMapper, sanitize_struct};

/// Request bodies for update endpoints, which take their id from the path.
pub trait UpdateData {
    /// Copies the path id into the body before validation.
    fn set_id(&mut self, id: i64);
}

/// Reads the `id` path parameter and stores it under [`PATH_ID_KEY`].
pub fn process_path_id<C>(ctx: &mut C) -> Result<(), Error>
where
    C: RequestContext,
{
    let id = path_id_default(ctx)?;
    ctx.set_data(PATH_ID_KEY, id);
    Ok(())
}

/// Reads pagination and search parameters, validates them, and stores the
/// [`Filter`](super::Filter) under [`FILTER_KEY`].
pub fn process_filter<C>(ctx: &mut C) -> Result<(), Error>
where
    C: RequestContext,
{
    let filter = filter_data(ctx);
    validate(&filter)?;
    ctx.set_data(FILTER_KEY, filter);
    Ok(())
}

/// Parses, sanitizes and validates the body of a create request, then stores
/// it under [`REQUEST_KEY`].
///
/// ```rust
/// use sanitizable::{
///     Sanitize,
///     http::{REQUEST_KEY, RequestAdapter, process_data},
/// };
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Sanitize, Validate)]
/// struct CreatePost {
///     #[validate(length(min = 1))]
///     title: String,
/// }
///
/// let mut ctx = RequestAdapter::new()
///     .with_body(r#"{"title": "  Hello<script>x()</script> "}"#);
/// process_data::<CreatePost, _>(&mut ctx).unwrap();
///
/// let post = ctx.data::<CreatePost>(REQUEST_KEY).unwrap();
/// assert_eq!(post.title, "Hello");
/// ```
pub fn process_data<T, C>(ctx: &mut C) -> Result<(), Error>
where
    T: DeserializeOwned + SanitizableWithMapper + Validate + Any + Send + Sync,
    C: RequestContext,
{
    let mut request: T = parse(ctx)?;
    sanitize_struct(&mut request);
    validate(&request)?;
    ctx.set_data(REQUEST_KEY, request);
    Ok(())
}

/// Like [`process_data`] for update requests: the `id` path parameter is read
/// first and copied into the body with [`UpdateData::set_id`] after
/// sanitization.
pub fn process_update_data<T, C>(ctx: &mut C) -> Result<(), Error>
where
    T: DeserializeOwned + SanitizableWithMapper + Validate + UpdateData + Any + Send + Sync,
    C: RequestContext,
{
    let id = path_id_default(ctx)?;
    let mut request: T = parse(ctx)?;
    sanitize_struct(&mut request);
    request.set_id(id);
    validate(&request)?;
    ctx.set_data(REQUEST_KEY, request);
    Ok(())
}
