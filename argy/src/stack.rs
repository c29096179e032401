//! Declared call shapes.
//!
//! A [`SlotStack`] is an ordered list of parameter slots. Declaration order
//! is the only link between a slot and an argument position, so slots are
//! append-only and the stack is borrowed immutably once resolution starts.
//!
//! ```
//! use argy::SlotStack;
//!
//! let stack = SlotStack::new()
//!     .required("name", "string")?
//!     .optional("age", "number")?;
//! assert_eq!(stack.len(), 2);
//!
//! let same = SlotStack::from_shorthand("string [number]")?;
//! assert_eq!(same.cardinalities(), stack.cardinalities());
//! # Ok::<(), argy::ArgyError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ArgyError, Result};
use crate::matcher::Matcher;
use crate::resolver::PresenceMask;

/// Whether a slot must be bound in every valid resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Required,
    Optional,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Required => "required",
            Cardinality::Optional => "optional",
        }
    }
}

impl FromStr for Cardinality {
    type Err = ArgyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "required" => Ok(Cardinality::Required),
            "optional" => Ok(Cardinality::Optional),
            other => Err(ArgyError::InvalidCardinality {
                cardinality: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter position.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    cardinality: Cardinality,
    /// Advisory binding name. Not used by resolution.
    name: Option<String>,
    matcher: Matcher,
}

impl Slot {
    pub fn new(cardinality: Cardinality, name: Option<String>, matcher: Matcher) -> Self {
        Self {
            cardinality,
            name,
            matcher,
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn is_required(&self) -> bool {
        self.cardinality == Cardinality::Required
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cardinality {
            Cardinality::Required => write!(f, "{}", self.matcher),
            Cardinality::Optional => write!(f, "[{}]", self.matcher),
        }
    }
}

/// Ordered sequence of declared slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStack {
    slots: Vec<Slot>,
}

impl SlotStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stack from a shorthand pattern, see [`SlotStack::shorthand`].
    pub fn from_shorthand(pattern: &str) -> Result<Self> {
        Self::new().shorthand(pattern)
    }

    /// Append a slot with the given cardinality.
    ///
    /// The type specification is compiled immediately; an unknown token
    /// fails the declaration. A stack holds at most
    /// [`PresenceMask::MAX_SLOTS`] slots.
    pub fn push<'a>(
        mut self,
        cardinality: Cardinality,
        name: impl Into<Option<&'a str>>,
        spec: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        if self.slots.len() >= PresenceMask::MAX_SLOTS {
            return Err(ArgyError::TooManySlots {
                count: self.slots.len() + 1,
                limit: PresenceMask::MAX_SLOTS,
            });
        }
        let matcher = Matcher::compile(spec.into())?;
        let name = name.into().map(str::to_string);
        trace!(
            position = self.slots.len(),
            %cardinality,
            %matcher,
            "declared slot"
        );
        self.slots.push(Slot::new(cardinality, name, matcher));
        Ok(self)
    }

    /// Append a slot, naming the cardinality as `"required"` or `"optional"`.
    pub fn add<'a>(
        self,
        cardinality: &str,
        name: impl Into<Option<&'a str>>,
        spec: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        let cardinality = cardinality.parse()?;
        self.push(cardinality, name, spec)
    }

    pub fn required<'a>(
        self,
        name: impl Into<Option<&'a str>>,
        spec: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        self.push(Cardinality::Required, name, spec)
    }

    /// Alias of [`SlotStack::required`].
    pub fn require<'a>(
        self,
        name: impl Into<Option<&'a str>>,
        spec: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        self.required(name, spec)
    }

    pub fn optional<'a>(
        self,
        name: impl Into<Option<&'a str>>,
        spec: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        self.push(Cardinality::Optional, name, spec)
    }

    /// Expand a shorthand pattern into slots.
    ///
    /// Tokens are separated by whitespace or commas. `[spec]` declares an
    /// optional slot, a bare `spec` a required one, so
    /// `"number [string] [function]"` is the same as one `required` and two
    /// `optional` calls.
    pub fn shorthand(self, pattern: &str) -> Result<Self> {
        pattern
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .try_fold(self, |stack, token| {
                match token
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                {
                    Some(inner) => stack.optional(None, inner),
                    None => stack.required(None, token),
                }
            })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    pub fn cardinalities(&self) -> Vec<Cardinality> {
        self.slots.iter().map(Slot::cardinality).collect()
    }

    /// Mask with one bit set per required slot.
    pub fn required_mask(&self) -> PresenceMask {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_required())
            .fold(PresenceMask::EMPTY, |mask, (position, _)| mask.with(position))
    }
}

impl fmt::Display for SlotStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
