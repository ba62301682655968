use crate::query::RawQuery;
use serde_json::Value;
use std::sync::Arc;

/// Performs a store request described by a [`RawQuery`].
///
/// Transport, wire encoding, credentials and response parsing all live behind
/// this trait. Implementations receive a query that is ready to send and
/// return the raw response document.
pub trait QueryExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, query: &RawQuery) -> Result<Value, Self::Error>;
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for &E {
    type Error = E::Error;

    fn execute(&self, query: &RawQuery) -> Result<Value, Self::Error> {
        (**self).execute(query)
    }
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for Box<E> {
    type Error = E::Error;

    fn execute(&self, query: &RawQuery) -> Result<Value, Self::Error> {
        (**self).execute(query)
    }
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for Arc<E> {
    type Error = E::Error;

    fn execute(&self, query: &RawQuery) -> Result<Value, Self::Error> {
        (**self).execute(query)
    }
}
