//! Handing finalized queries to the component that talks to the store.

pub mod config;
mod dispatcher;
mod executor;

pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use executor::QueryExecutor;
