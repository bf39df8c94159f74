//! Host-framework seam for the request pipeline.

use std::{any::Any, collections::HashMap, fmt};

use serde::de::DeserializeOwned;

/// Access to one in-flight request.
///
/// Framework integrations implement this for their context type. The pipeline
/// only reads path and query parameters, deserializes the body, and stores
/// results under well-known keys; routing and rendering stay with the host.
pub trait RequestContext {
    /// Error produced when the body cannot be deserialized. Its `Display`
    /// output becomes the rejection message.
    type BodyError: fmt::Display;

    /// Returns the raw value of path parameter `name`.
    fn path_val(&self, name: &str) -> Option<String>;

    /// Returns the raw value of query parameter `name`.
    fn query_str(&self, name: &str) -> Option<String>;

    /// Returns query parameter `name` parsed as an integer.
    fn query_int(&self, name: &str) -> Option<i64> {
        self.query_str(name).and_then(|raw| raw.parse().ok())
    }

    /// Deserializes the request body.
    fn parse_body<T: DeserializeOwned>(&mut self) -> Result<T, Self::BodyError>;

    /// Stores `value` for later handlers under `key`.
    fn set_data<T: Any + Send + Sync>(&mut self, key: &'static str, value: T);
}

/// Owned request context backed by in-memory maps and a JSON body.
///
/// Useful for framework integrations that buffer the request up front, and
/// for exercising pipeline steps without a server.
///
/// ```rust
/// use sanitizable::http::{PATH_ID_KEY, RequestAdapter, process_path_id};
///
/// let mut ctx = RequestAdapter::new().with_path_param("id", "42");
/// process_path_id(&mut ctx).unwrap();
/// assert_eq!(ctx.data::<i64>(PATH_ID_KEY), Some(&42));
/// ```
#[derive(Debug, Default)]
pub struct RequestAdapter {
    path_params: HashMap<String, String>,
    query_params: HashMap<String, String>,
    body: Vec<u8>,
    data: HashMap<&'static str, Box<dyn Any + Send + Sync>>,
}

impl RequestAdapter {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path parameter.
    #[must_use]
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Sets the raw JSON body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the value stored under `key` if it has type `T`.
    pub fn data<T: Any>(&self, key: &str) -> Option<&T> {
        self.data.get(key).and_then(|value| value.downcast_ref())
    }

    /// Removes and returns the value stored under `key` if it has type `T`.
    ///
    /// A value of another type is left in place.
    pub fn take_data<T: Any>(&mut self, key: &str) -> Option<T> {
        if !self.data.get(key).is_some_and(|value| value.is::<T>()) {
            return None;
        }
        self.data
            .remove(key)
            .and_then(|value| value.downcast().ok())
            .map(|boxed| *boxed)
    }
}

impl RequestContext for RequestAdapter {
    type BodyError = serde_json::Error;

    fn path_val(&self, name: &str) -> Option<String> {
        self.path_params.get(name).cloned()
    }

    fn query_str(&self, name: &str) -> Option<String> {
        self.query_params.get(name).cloned()
    }

    fn parse_body<T: DeserializeOwned>(&mut self) -> Result<T, Self::BodyError> {
        serde_json::from_slice(&self.body)
    }

    fn set_data<T: Any + Send + Sync>(&mut self, key: &'static str, value: T) {
        self.data.insert(key, Box::new(value));
    }
}
