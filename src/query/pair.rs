//! Legacy two-slot view of a [`RawQuery`].
//!
//! Older callers treat a query as the ordered list `[operation, body]`. The
//! methods here answer index lookups, writes, removals, iteration and length
//! against that list without ever storing it: every call reads the current
//! `operation` and `body` fields.

use super::envelope::RawQuery;
use crate::core::{Body, EnvelopeError, PAIR_LEN, Result};
use serde_json::Value;
use std::iter::FusedIterator;

/// A position in the legacy pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairSlot {
    Operation,
    Body,
}

impl PairSlot {
    pub const ALL: [PairSlot; PAIR_LEN] = [PairSlot::Operation, PairSlot::Body];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PairSlot::Operation),
            1 => Some(PairSlot::Body),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PairSlot::Operation => 0,
            PairSlot::Body => 1,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            PairSlot::Operation => "an operation name",
            PairSlot::Body => "a body map",
        }
    }
}

/// Borrowed value at one slot of the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairValue<'a> {
    Operation(&'a str),
    Body(&'a Body),
}

impl<'a> PairValue<'a> {
    pub fn slot(&self) -> PairSlot {
        match self {
            PairValue::Operation(_) => PairSlot::Operation,
            PairValue::Body(_) => PairSlot::Body,
        }
    }

    pub fn as_operation(&self) -> Option<&'a str> {
        match *self {
            PairValue::Operation(op) => Some(op),
            PairValue::Body(_) => None,
        }
    }

    pub fn as_body(&self) -> Option<&'a Body> {
        match *self {
            PairValue::Body(body) => Some(body),
            PairValue::Operation(_) => None,
        }
    }

    /// JSON form of this slot, as a legacy list element.
    pub fn to_json(&self) -> Value {
        match self {
            PairValue::Operation(op) => Value::String((*op).to_string()),
            PairValue::Body(body) => Value::Object((*body).clone()),
        }
    }

    pub fn to_entry(&self) -> PairEntry {
        match self {
            PairValue::Operation(op) => PairEntry::Operation((*op).to_string()),
            PairValue::Body(body) => PairEntry::Body((*body).clone()),
        }
    }
}

/// Owned value written to or removed from a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PairEntry {
    Operation(String),
    Body(Body),
}

impl PairEntry {
    pub fn slot(&self) -> PairSlot {
        match self {
            PairEntry::Operation(_) => PairSlot::Operation,
            PairEntry::Body(_) => PairSlot::Body,
        }
    }
}

impl From<String> for PairEntry {
    fn from(value: String) -> Self {
        PairEntry::Operation(value)
    }
}

impl From<&str> for PairEntry {
    fn from(value: &str) -> Self {
        PairEntry::Operation(value.to_string())
    }
}

impl From<Body> for PairEntry {
    fn from(value: Body) -> Self {
        PairEntry::Body(value)
    }
}

impl RawQuery {
    /// True iff `index` addresses one of the two pair slots.
    pub fn contains_key(&self, index: usize) -> bool {
        PairSlot::from_index(index).is_some()
    }

    /// Read slot `index`: the operation at 0, the body at 1.
    pub fn get(&self, index: usize) -> Result<PairValue<'_>> {
        match PairSlot::from_index(index) {
            Some(slot) => Ok(self.slot(slot)),
            None => Err(EnvelopeError::out_of_range(index)),
        }
    }

    pub fn slot(&self, slot: PairSlot) -> PairValue<'_> {
        match slot {
            PairSlot::Operation => PairValue::Operation(self.operation()),
            PairSlot::Body => PairValue::Body(self.body()),
        }
    }

    /// Write slot `index`. The pair never grows past two slots, and each slot
    /// only accepts its own kind of value.
    pub fn set(&mut self, index: usize, entry: impl Into<PairEntry>) -> Result<()> {
        let slot = PairSlot::from_index(index).ok_or_else(|| EnvelopeError::out_of_range(index))?;

        match (slot, entry.into()) {
            (PairSlot::Operation, PairEntry::Operation(op)) => self.set_operation(op),
            (PairSlot::Body, PairEntry::Body(body)) => self.replace_body(body),
            (slot, _) => {
                return Err(EnvelopeError::SlotMismatch {
                    index,
                    expected: slot.expected(),
                });
            }
        }

        Ok(())
    }

    /// Clear slot `index` and hand back its previous value.
    ///
    /// The operation is cleared to `""` and the body to an empty map, so the
    /// query always stays a well-formed pair. Unknown indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<PairEntry> {
        match PairSlot::from_index(index)? {
            PairSlot::Operation => {
                let previous = self.take_operation();
                Some(PairEntry::Operation(previous))
            }
            PairSlot::Body => {
                let previous = std::mem::take(self.body_mut());
                Some(PairEntry::Body(previous))
            }
        }
    }

    pub fn iter(&self) -> PairIter<'_> {
        PairIter {
            query: self,
            front: 0,
            back: PAIR_LEN,
        }
    }

    /// Always 2, whatever the body holds.
    pub fn len(&self) -> usize {
        PAIR_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Iterator over `(index, value)` for the two pair slots.
#[derive(Debug, Clone)]
pub struct PairIter<'a> {
    query: &'a RawQuery,
    front: usize,
    back: usize,
}

impl<'a> Iterator for PairIter<'a> {
    type Item = (usize, PairValue<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let slot = PairSlot::ALL[self.front];
        self.front += 1;
        Some((slot.index(), self.query.slot(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PairIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let slot = PairSlot::ALL[self.back];
        Some((slot.index(), self.query.slot(slot)))
    }
}

impl ExactSizeIterator for PairIter<'_> {}

impl FusedIterator for PairIter<'_> {}

impl<'a> IntoIterator for &'a RawQuery {
    type Item = (usize, PairValue<'a>);
    type IntoIter = PairIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
