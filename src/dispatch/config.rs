/// Dispatch behaviour configuration
///
/// Controls what the [`Dispatcher`](super::Dispatcher) does to a query before
/// handing it to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Run `finalize` on every query before execution
    pub finalize: bool,

    /// Refuse queries whose operation name is empty
    pub reject_empty_operation: bool,

    /// Log the full request body at TRACE level
    pub trace_body: bool,
}

impl DispatchConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            finalize: true,
            reject_empty_operation: false,
            trace_body: false,
        }
    }

    /// Set whether queries are finalized before dispatch
    pub fn finalize(mut self, enabled: bool) -> Self {
        self.finalize = enabled;
        self
    }

    /// Set whether an empty operation name is an error
    pub fn reject_empty_operation(mut self, enabled: bool) -> Self {
        self.reject_empty_operation = enabled;
        self
    }

    /// Set whether request bodies are traced
    pub fn trace_body(mut self, enabled: bool) -> Self {
        self.trace_body = enabled;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
