pub mod error;
pub mod value;

pub use error::{EnvelopeError, PAIR_LEN, Result};
pub use value::{Body, empty_keys, is_meaningful};
