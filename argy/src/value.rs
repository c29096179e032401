//! Dynamic argument values and their classification labels.
//!
//! Call arguments are modelled as a closed dynamic value type. Every
//! variant maps to exactly one [`ValueKind`] label, so arrays and dates have
//! dedicated variants and can never fall through to the generic `object`
//! bucket, and `null` is distinct from `undefined`.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A runtime argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value supplied.
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Date(SystemTime),
    /// A plain keyed object. Key order is insertion order.
    Object(IndexMap<String, Value>),
    Function(Callable),
}

/// Classification label of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Undefined,
    Null,
    Array,
    Date,
    Object,
    Function,
    String,
    Number,
    Boolean,
}

impl ValueKind {
    /// Every label, in classification order.
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Undefined,
        ValueKind::Null,
        ValueKind::Array,
        ValueKind::Date,
        ValueKind::Object,
        ValueKind::Function,
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Boolean,
    ];

    /// The lower-case label used in form signatures and matcher tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Date => "date",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
        }
    }

    /// Look up a label. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value into its label.
pub fn classify(value: &Value) -> ValueKind {
    value.kind()
}

impl Value {
    /// The classification label of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Date(_) => ValueKind::Date,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            // f64's Display already omits the fraction for integral values.
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    match item {
                        Value::Undefined | Value::Null => {}
                        other => write!(f, "{other}")?,
                    }
                }
                Ok(())
            }
            Value::Date(time) => write!(f, "Date({})", epoch_millis(*time)),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(callable) => match callable.name() {
                Some(name) => write!(f, "[function {name}]"),
                None => write!(f, "[function]"),
            },
        }
    }
}

fn epoch_millis(time: SystemTime) -> i128 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as i128,
        Err(before) => -(before.duration().as_millis() as i128),
    }
}

/// Signature of a native function carried by [`Value::Function`].
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared native function value.
///
/// Two callables compare equal only when they are the same allocation.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<NativeFn>,
}

impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "fn {name}(..)"),
            None => write!(f, "fn(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<SystemTime> for Value {
    fn from(time: SystemTime) -> Self {
        Value::Date(time)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// An ordered snapshot of the arguments of one call.
///
/// Trailing `Undefined` values are dropped when the snapshot is taken, so an
/// argument passed as `Undefined` at the end of a call is the same as one
/// that was never passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    pub fn new(mut values: Vec<Value>) -> Self {
        while values.last().is_some_and(Value::is_undefined) {
            values.pop();
        }
        Self { values }
    }

    /// A zero-argument call.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON payload into arguments.
    ///
    /// A JSON array supplies one argument per element; any other JSON value
    /// is a single argument.
    pub fn from_json(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(match json {
            serde_json::Value::Array(items) => {
                Self::new(items.into_iter().map(Value::from).collect())
            }
            other => Self::new(vec![Value::from(other)]),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Build an [`Arguments`] snapshot from expressions convertible into [`Value`].
///
/// ```
/// let args = argy::args!["Matt", 30];
/// assert_eq!(argy::form_of(&args), "string,number");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::new(vec![$($crate::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_every_label() {
        let mut map = IndexMap::new();
        map.insert("foo".to_string(), Value::from("bar"));

        let cases = vec![
            (Value::from(vec![1, 2]), ValueKind::Array),
            (Value::from(SystemTime::now()), ValueKind::Date),
            (Value::Null, ValueKind::Null),
            (Value::from(map), ValueKind::Object),
            (Value::from(Callable::new(|_| Value::Undefined)), ValueKind::Function),
            (Value::from("s"), ValueKind::String),
            (Value::from(5), ValueKind::Number),
            (Value::from(true), ValueKind::Boolean),
            (Value::Undefined, ValueKind::Undefined),
        ];

        for (value, expected) in cases {
            assert_eq!(classify(&value), expected, "classifying {:?}", value);
        }
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        assert_eq!(ValueKind::from_label("Number"), Some(ValueKind::Number));
        assert_eq!(ValueKind::from_label("ARRAY"), Some(ValueKind::Array));
        assert_eq!(ValueKind::from_label("collection"), None);
    }

    #[test]
    fn test_trailing_undefined_is_trimmed() {
        let args = Arguments::new(vec![
            Value::from("a"),
            Value::Undefined,
            Value::from(1),
            Value::Undefined,
            Value::Undefined,
        ]);
        assert_eq!(args.len(), 3);
        assert!(args.get(1).is_some_and(Value::is_undefined));
    }

    #[test]
    fn test_args_macro() {
        let args = crate::args!["John", 30, None::<i32>];
        assert_eq!(args.len(), 2);
        assert_eq!(args.get(0).and_then(Value::as_str), Some("John"));
        assert_eq!(args.get(1).and_then(Value::as_number), Some(30.0));
        assert!(crate::args![].is_empty());
    }

    #[test]
    fn test_from_json() {
        let args = Arguments::from_json(r#"["Joan", ["Glitch", "Widget"], {"a": null}]"#).unwrap();
        assert_eq!(args.len(), 3);
        assert_eq!(args.get(1).map(Value::kind), Some(ValueKind::Array));
        assert_eq!(args.get(2).map(Value::kind), Some(ValueKind::Object));

        let single = Arguments::from_json("42").unwrap();
        assert_eq!(single.as_slice(), &[Value::Number(42.0)]);

        assert!(Arguments::from_json("[1,").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(vec!["Rover", "Rex"]).to_string(), "Rover,Rex");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(
            Value::from(Callable::named("greet", |_| Value::Null)).to_string(),
            "[function greet]"
        );
    }

    #[test]
    fn test_callable_identity() {
        let f = Callable::new(|args| Value::from(args.len() as i64));
        let g = f.clone();
        let h = Callable::new(|args| Value::from(args.len() as i64));
        assert_eq!(f, g);
        assert_ne!(f, h);
        assert_eq!(f.call(&[Value::Null, Value::Null]), Value::Number(2.0));
    }
}
