// ============================================================================
// dynaquery Library
// ============================================================================

pub mod core;
pub mod dispatch;
pub mod query;

// Re-export main types for convenience
pub use core::{Body, EnvelopeError, Result, is_meaningful};
pub use dispatch::{DispatchConfig, Dispatcher, QueryExecutor};
pub use query::{PairEntry, PairIter, PairSlot, PairValue, RawQuery};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Build a [`RawQuery`] from an operation name and a JSON object literal.
///
/// # Examples
///
/// ```
/// use dynaquery::raw_query;
///
/// let mut query = raw_query!("Scan", {"TableName": "Foo", "FilterExpression": ""});
/// query.finalize();
///
/// assert_eq!(query.operation(), "Scan");
/// assert_eq!(query.body().len(), 1);
/// assert_eq!(query.len(), 2);
/// ```
#[macro_export]
macro_rules! raw_query {
    ($operation:expr, { $($body:tt)* }) => {
        $crate::RawQuery::new(
            $operation,
            match $crate::__private::serde_json::json!({ $($body)* }) {
                $crate::__private::serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            },
        )
    };
}
