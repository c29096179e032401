//! Overload resolution against a declared slot stack.
//!
//! Given a [`SlotStack`] and one call's [`Arguments`], the resolver finds
//! which presence assignments of the stack's slots the call satisfies, and
//! extracts the canonical positional value vector.
//!
//! # Algorithm Overview
//!
//! 1. **Required mask**: one bit per required slot
//! 2. **Enumerate candidates**: every presence mask in `0..2^N`
//! 3. **Required filter**: drop masks missing a required bit
//! 4. **Matcher filter**: drop candidates whose alignment is invalid
//! 5. **Select**: the lowest surviving mask wins
//!
//! The alignment walks the arguments and the declared stack with two
//! cursors. An argument a slot rejects leaves an optional slot unbound and
//! is retried against the next slot; a required slot that rejects its
//! argument, receives `undefined`, or is left over once the arguments run
//! out invalidates the alignment. Arguments past the end of the stack are
//! bound as-is.
//!
//! Enumeration is exponential in the stack length. Stacks longer than
//! [`ResolverConfig::max_slots`] are rejected before any work is done.
//!
//! # Module Structure
//!
//! - [`mask`] - Presence masks
//! - [`table`] - Truth table rows and satisfaction flags

mod mask;
mod table;


use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::error::{ArgyError, Result};
use crate::form::form_of;
use crate::stack::{Slot, SlotStack};
use crate::value::{Arguments, Value};

pub use mask::PresenceMask;
pub use table::{Outcome, Satisfies, TruthTable};

/// Result of aligning one call's arguments against the stack.
#[derive(Debug, Clone)]
struct Alignment {
    values: Vec<Value>,
    valid: bool,
}

/// Resolution session for a single call.
///
/// A resolver owns its argument snapshot and borrows the stack; create one
/// per call.
#[derive(Debug)]
pub struct Resolver<'s> {
    stack: &'s SlotStack,
    args: Arguments,
    config: ResolverConfig,
}

impl<'s> Resolver<'s> {
    pub fn new(stack: &'s SlotStack, args: impl Into<Arguments>) -> Self {
        Self {
            stack,
            args: args.into(),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn arguments(&self) -> &Arguments {
        &self.args
    }

    pub fn stack(&self) -> &SlotStack {
        self.stack
    }

    /// Number of presence masks enumerated for this stack (`2^N`).
    pub fn candidate_count(&self) -> u64 {
        1u64 << self.stack.len().min(PresenceMask::MAX_SLOTS)
    }

    /// Compute the truth table.
    ///
    /// `apply_required` drops masks that do not mark every required slot
    /// present; `apply_matchers` drops candidates whose alignment is
    /// invalid. With both on, every row is a valid match for the call.
    pub fn truth_table(&self, apply_required: bool, apply_matchers: bool) -> Result<TruthTable> {
        self.check_size()?;

        let required = self.stack.required_mask();
        // The alignment walks the declared stack, so it is shared by every
        // candidate.
        let alignment = self.align();
        let mut table = TruthTable::default();

        if apply_matchers && !alignment.valid {
            trace!(candidates = self.candidate_count(), "every candidate rejected by matchers");
            return Ok(table);
        }

        for mask in PresenceMask::all(self.stack.len()) {
            let required_ok = mask.contains(required);
            if apply_required && !required_ok {
                trace!(%mask, %required, "candidate misses a required slot");
                continue;
            }

            table.insert(Outcome {
                mask,
                values: alignment.values.clone(),
                satisfies: Satisfies {
                    required: required_ok,
                    matchers: alignment.valid,
                },
            });
        }

        trace!(
            candidates = self.candidate_count(),
            surviving = table.len(),
            "computed truth table"
        );
        Ok(table)
    }

    /// Resolve the call to one positional value vector.
    ///
    /// Picks the lowest surviving presence mask, so the interpretation that
    /// treats the fewest optional slots as supplied wins. Fails with
    /// [`ArgyError::InvalidInvocation`] when no candidate survives.
    pub fn resolve(&self) -> Result<Vec<Value>> {
        let table = self.truth_table(true, true)?;

        let Some(outcome) = table.into_first() else {
            let form = form_of(&self.args);
            debug!(%form, stack = %self.stack, "invalid invocation");
            return Err(ArgyError::InvalidInvocation { form });
        };

        debug!(mask = %outcome.mask, stack = %self.stack, "resolved call");
        let mut values = outcome.values;
        if self.config.pad_to_stack && values.len() < self.stack.len() {
            values.resize(self.stack.len(), Value::Undefined);
        }
        Ok(values)
    }

    fn check_size(&self) -> Result<()> {
        let limit = self.config.max_slots.min(PresenceMask::MAX_SLOTS);
        if self.stack.len() > limit {
            return Err(ArgyError::TooManySlots {
                count: self.stack.len(),
                limit,
            });
        }
        Ok(())
    }

    fn align(&self) -> Alignment {
        let slots = self.stack.slots();
        let args = self.args.as_slice();
        let mut values = Vec::with_capacity(slots.len().max(args.len()));
        let mut slot_at = 0;
        let mut arg_at = 0;

        while let Some(arg) = args.get(arg_at) {
            let slot = slots.get(slot_at);

            if arg.is_undefined() {
                if slot.is_some_and(Slot::is_required) {
                    trace!(position = slot_at, "required slot given undefined");
                    return Alignment { values, valid: false };
                }
                values.push(Value::Undefined);
                arg_at += 1;
                slot_at += 1;
                continue;
            }

            match slot {
                None => {
                    values.push(arg.clone());
                    arg_at += 1;
                    slot_at += 1;
                }
                Some(slot) if slot.matcher().matches(arg) => {
                    values.push(arg.clone());
                    arg_at += 1;
                    slot_at += 1;
                }
                Some(slot) if !slot.is_required() => {
                    values.push(Value::Undefined);
                    slot_at += 1;
                }
                Some(slot) => {
                    trace!(
                        position = slot_at,
                        expected = %slot.matcher(),
                        found = %arg.kind(),
                        "required slot rejected argument"
                    );
                    return Alignment { values, valid: false };
                }
            }
        }

        if let Some(offset) = slots
            .get(slot_at..)
            .and_then(|rest| rest.iter().position(Slot::is_required))
        {
            trace!(position = slot_at + offset, "required slot left unbound");
            return Alignment { values, valid: false };
        }

        Alignment { values, valid: true }
    }
}

impl SlotStack {
    /// Start a resolution session for one call.
    pub fn resolver(&self, args: impl Into<Arguments>) -> Resolver<'_> {
        Resolver::new(self, args)
    }

    /// Resolve one call with the default configuration.
    pub fn resolve(&self, args: impl Into<Arguments>) -> Result<Vec<Value>> {
        self.resolver(args).resolve()
    }

    /// Alias of [`SlotStack::resolve`].
    pub fn parse(&self, args: impl Into<Arguments>) -> Result<Vec<Value>> {
        self.resolve(args)
    }

    /// Compute the truth table for one call.
    pub fn truth_table(
        &self,
        args: impl Into<Arguments>,
        apply_required: bool,
        apply_matchers: bool,
    ) -> Result<TruthTable> {
        self.resolver(args).truth_table(apply_required, apply_matchers)
    }
}
