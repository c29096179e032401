//! Argy: call-shape overload resolution
//!
//! Lets a function accept several call shapes, such as `(name)`,
//! `(name, age)` and `(age)`, and work out at call time which declared
//! shape the actual arguments satisfy.
//!
//! # Features
//!
//! - Declarative slot stacks of required and optional typed parameters
//! - Shorthand patterns: `"string [number] [function]"`
//! - Union type specifications: `"string|array"`, plus the synthetic
//!   categories `*`, `scalar`, `ok` and `notok`
//! - Positional extraction: resolve a call to one value per declared slot
//! - Wrapped callbacks that resolve every invocation
//! - Form dispatch: run callbacks keyed on the call's type signature
//!
//! # Example
//!
//! ```
//! use argy::{args, SlotStack, Value};
//!
//! let stack = SlotStack::from_shorthand("[string] [number]")?;
//!
//! assert_eq!(stack.resolve(args!["John"])?, vec![Value::from("John"), Value::Undefined]);
//! assert_eq!(stack.resolve(args![23])?, vec![Value::Undefined, Value::from(23)]);
//! # Ok::<(), argy::ArgyError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────┐    ┌───────────┐
//! │ SlotStack  │───►│ Resolver │───►│ Vec<Value>│
//! └────────────┘    └──────────┘    └───────────┘
//!        ▲                ▲
//!   Matcher/Category  Arguments ───► FormDispatch ───► callbacks
//! ```
//!
//! Resolution is synchronous and allocation-light. Resolvers and dispatch
//! sessions are per-call objects; wrapped callbacks create one per
//! invocation.

pub mod category;
pub mod config;
pub mod error;
pub mod form;
pub mod matcher;
pub mod resolver;
pub mod stack;
pub mod value;
pub mod wrap;

pub use category::{is_type, matches_category, Category};
pub use config::ResolverConfig;
pub use error::{ArgyError, Result};
pub use form::{form_of, FormDispatch, FormPattern};
pub use matcher::Matcher;
pub use resolver::{Outcome, PresenceMask, Resolver, Satisfies, TruthTable};
pub use stack::{Cardinality, Slot, SlotStack};
pub use value::{classify, Arguments, Callable, NativeFn, Value, ValueKind};
pub use wrap::{Wrapped, WrappedMethod};
