//! The operation + body pair handed to a query executor.

use crate::core::{Body, is_meaningful};
use tracing::debug;

/// A single store request: an operation tag such as `"Scan"` or `"Query"`
/// and the parameters that go with it.
///
/// `operation` and `body` are the only state. The legacy `[operation, body]`
/// view in [`crate::query::pair`] is derived from them on every access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawQuery {
    operation: String,
    body: Body,
}

impl RawQuery {
    /// Create an envelope. No validation is performed.
    pub fn new(operation: impl Into<String>, body: Body) -> Self {
        Self {
            operation: operation.into(),
            body,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the body while the request is being built.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Replace the operation tag.
    pub fn set_operation(&mut self, operation: impl Into<String>) {
        self.operation = operation.into();
    }

    /// Replace the whole body.
    pub fn replace_body(&mut self, body: Body) {
        self.body = body;
    }

    pub(super) fn take_operation(&mut self) -> String {
        std::mem::take(&mut self.operation)
    }

    pub fn into_parts(self) -> (String, Body) {
        (self.operation, self.body)
    }

    /// Remove every body entry rejected by [`is_meaningful`].
    ///
    /// Remaining keys keep their order. Calling this again is a no-op.
    pub fn finalize(&mut self) -> &mut Self {
        let before = self.body.len();
        self.body.retain(|_, value| is_meaningful(value));

        let dropped = before - self.body.len();
        if dropped > 0 {
            debug!(operation = %self.operation, dropped, "finalized query body");
        }

        self
    }

    /// Consuming variant of [`RawQuery::finalize`].
    pub fn finalized(mut self) -> Self {
        self.finalize();
        self
    }
}

impl<S: Into<String>> From<(S, Body)> for RawQuery {
    fn from((operation, body): (S, Body)) -> Self {
        Self::new(operation, body)
    }
}

impl From<RawQuery> for (String, Body) {
    fn from(query: RawQuery) -> Self {
        query.into_parts()
    }
}
