use super::config::DispatchConfig;
use super::executor::QueryExecutor;
use crate::core::{EnvelopeError, Result};
use crate::query::RawQuery;
use serde_json::Value;
use tracing::{debug, info_span, trace, warn};

/// Prepares queries and hands them to a [`QueryExecutor`].
pub struct Dispatcher<E> {
    executor: E,
    config: DispatchConfig,
}

impl<E: QueryExecutor> Dispatcher<E> {
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, DispatchConfig::default())
    }

    pub fn with_config(executor: E, config: DispatchConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Finalize (if configured) and execute `query`, returning the raw response.
    pub fn dispatch(&self, mut query: RawQuery) -> Result<Value> {
        let span = info_span!("dispatch", operation = %query.operation());
        let _enter = span.enter();

        if self.config.finalize {
            query.finalize();
        }

        if self.config.reject_empty_operation && query.operation().is_empty() {
            return Err(EnvelopeError::EmptyOperation);
        }

        debug!(keys = query.body().len(), "executing query");
        if self.config.trace_body {
            let body = Value::Object(query.body().clone());
            trace!(body = %body, "query body");
        }

        self.executor.execute(&query).map_err(|err| {
            warn!(error = %err, "executor failed");
            EnvelopeError::executor(err)
        })
    }
}
