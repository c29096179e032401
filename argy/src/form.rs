//! Dispatch on the form of a call.
//!
//! A form is the comma-joined labels of a call's leading defined arguments,
//! for example `"string,number"` for `("Matt", 30)`. A [`FormDispatch`]
//! session compares that form against declared patterns in order and runs
//! the callbacks of the patterns that match.
//!
//! ```
//! use argy::{args, FormDispatch};
//!
//! let mut id = String::new();
//! FormDispatch::new(args!["Matt", 30])
//!     .on_form("string", |a| id = a[0].to_string())
//!     .on_form("string,number", |a| id = format!("{} ({})", a[0], a[1]))
//!     .on_form_else(|_| id = "Unknown".to_string());
//! assert_eq!(id, "Matt (30)");
//! ```

use tracing::trace;

use crate::value::{classify, Arguments, Value};

/// Form signature of an argument list.
///
/// Classification stops at the first `undefined` argument; a call with no
/// arguments has the empty form.
pub fn form_of(args: &Arguments) -> String {
    args.iter()
        .take_while(|value| !value.is_undefined())
        .map(|value| classify(value).as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// One pattern or a list of alternative patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPattern {
    One(String),
    AnyOf(Vec<String>),
}

impl FormPattern {
    pub fn matches(&self, form: &str) -> bool {
        match self {
            FormPattern::One(pattern) => pattern == form,
            FormPattern::AnyOf(patterns) => patterns.iter().any(|pattern| pattern == form),
        }
    }
}

impl From<&str> for FormPattern {
    fn from(pattern: &str) -> Self {
        FormPattern::One(pattern.to_string())
    }
}

impl From<String> for FormPattern {
    fn from(pattern: String) -> Self {
        FormPattern::One(pattern)
    }
}

impl From<&[&str]> for FormPattern {
    fn from(patterns: &[&str]) -> Self {
        FormPattern::AnyOf(patterns.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FormPattern {
    fn from(patterns: [&str; N]) -> Self {
        FormPattern::AnyOf(patterns.iter().map(|p| p.to_string()).collect())
    }
}

impl From<Vec<String>> for FormPattern {
    fn from(patterns: Vec<String>) -> Self {
        FormPattern::AnyOf(patterns)
    }
}

/// Form dispatch session for a single call.
///
/// The form is computed on first use and kept for the session. Once any
/// `on_form` branch matches, `on_form_else` no longer fires. Sessions are
/// not reusable across calls.
#[derive(Debug)]
pub struct FormDispatch {
    args: Arguments,
    computed_form: Option<String>,
    matched: bool,
}

impl FormDispatch {
    pub fn new(args: impl Into<Arguments>) -> Self {
        Self {
            args: args.into(),
            computed_form: None,
            matched: false,
        }
    }

    /// The form of this call.
    pub fn form(&mut self) -> &str {
        self.computed_form.get_or_insert_with(|| form_of(&self.args))
    }

    /// Whether any `on_form` branch has matched so far.
    pub fn matched(&self) -> bool {
        self.matched
    }

    pub fn arguments(&self) -> &Arguments {
        &self.args
    }

    pub fn into_arguments(self) -> Arguments {
        self.args
    }

    /// Run `callback` with the call's arguments if the form matches
    /// `pattern`.
    ///
    /// Every `on_form` in a chain is evaluated, so overlapping patterns can
    /// fire more than once.
    pub fn on_form<P, F>(&mut self, pattern: P, callback: F) -> &mut Self
    where
        P: Into<FormPattern>,
        F: FnOnce(&[Value]),
    {
        let pattern = pattern.into();
        let hit = pattern.matches(self.form());
        if hit {
            trace!(form = %self.form(), ?pattern, "form matched");
            self.matched = true;
            callback(self.args.as_slice());
        }
        self
    }

    /// Run `callback` if no earlier `on_form` in this session matched.
    pub fn on_form_else<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&[Value]),
    {
        if !self.matched {
            trace!(form = %self.form(), "no form matched");
            callback(self.args.as_slice());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_form_signatures() {
        assert_eq!(form_of(&args!["John"]), "string");
        assert_eq!(form_of(&args!["Matt", 30]), "string,number");
        assert_eq!(form_of(&args![]), "");
    }

    #[test]
    fn test_form_stops_at_first_undefined() {
        let args = Arguments::new(vec![Value::from("a"), Value::Undefined, Value::from(5)]);
        assert_eq!(form_of(&args), "string");
    }

    #[test]
    fn test_form_is_memoized() {
        let mut dispatch = FormDispatch::new(args![vec![1], Value::Null]);
        assert_eq!(dispatch.form(), "array,null");
        assert_eq!(dispatch.computed_form.as_deref(), Some("array,null"));
        assert_eq!(dispatch.form(), "array,null");
    }

    #[test]
    fn test_else_fires_only_without_match() {
        let mut fired = Vec::new();
        FormDispatch::new(args![1])
            .on_form("string", |_| fired.push("string"))
            .on_form_else(|_| fired.push("else"));
        assert_eq!(fired, vec!["else"]);

        let mut fired = Vec::new();
        let mut dispatch = FormDispatch::new(args!["x"]);
        dispatch
            .on_form("string", |_| fired.push("string"))
            .on_form_else(|_| fired.push("else"));
        assert!(dispatch.matched());
        assert_eq!(fired, vec!["string"]);
    }

    #[test]
    fn test_overlapping_patterns_all_fire() {
        let mut count = 0;
        FormDispatch::new(args!["x"])
            .on_form("string", |_| count += 1)
            .on_form(["number", "string"], |_| count += 1)
            .on_form("number", |_| count += 100);
        assert_eq!(count, 2);
    }
}
