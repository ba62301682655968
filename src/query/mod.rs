//! Query envelope and its legacy list-compatible views.

mod envelope;
mod legacy;
pub mod pair;

pub use envelope::RawQuery;
pub use pair::{PairEntry, PairIter, PairSlot, PairValue};
