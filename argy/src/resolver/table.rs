//! Truth tables produced by resolution.

use std::collections::BTreeMap;

use super::mask::PresenceMask;
use crate::value::Value;

/// Which constraints a candidate satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satisfies {
    /// Every required slot is marked present in the candidate's mask.
    pub required: bool,
    /// The alignment bound every argument without a required-slot rejection.
    pub matchers: bool,
}

impl Satisfies {
    pub fn all(self) -> bool {
        self.required && self.matchers
    }
}

/// One surviving candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The presence mask of the candidate.
    pub mask: PresenceMask,
    /// Values aligned to stack positions; `Undefined` for unbound optionals.
    pub values: Vec<Value>,
    pub satisfies: Satisfies,
}

/// Surviving candidates keyed by presence mask, in ascending mask order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TruthTable {
    rows: BTreeMap<PresenceMask, Outcome>,
}

impl TruthTable {
    pub fn insert(&mut self, outcome: Outcome) {
        self.rows.insert(outcome.mask, outcome);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, mask: PresenceMask) -> Option<&Outcome> {
        self.rows.get(&mask)
    }

    /// The row with the lowest mask.
    pub fn first(&self) -> Option<&Outcome> {
        self.rows.values().next()
    }

    pub fn into_first(self) -> Option<Outcome> {
        self.rows.into_values().next()
    }

    pub fn masks(&self) -> impl Iterator<Item = PresenceMask> + '_ {
        self.rows.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.rows.values()
    }
}
