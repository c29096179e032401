//! Category queries over classified values.
//!
//! A category is either a literal [`ValueKind`] label or one of the
//! synthetic classes `*`, `scalar`, `ok` and `notok` (each with an alias).
//! Synthetic classes are defined over the classified label, not over the
//! value itself.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArgyError, Result};
use crate::value::{classify, Value, ValueKind};

/// A single matcher token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `*` / `any`: accepts every value.
    Any,
    /// `scalar` / `basic`: numbers and strings.
    Scalar,
    /// `ok` / `truey`: anything but `null` or `undefined`.
    Ok,
    /// `notok` / `falsy`: `null` or `undefined`.
    NotOk,
    /// An exact classification label.
    Kind(ValueKind),
}

impl Category {
    /// Whether `value` belongs to this category.
    pub fn matches(self, value: &Value) -> bool {
        let kind = classify(value);
        match self {
            Category::Any => true,
            Category::Scalar => matches!(kind, ValueKind::Number | ValueKind::String),
            Category::Ok => !matches!(kind, ValueKind::Null | ValueKind::Undefined),
            Category::NotOk => matches!(kind, ValueKind::Null | ValueKind::Undefined),
            Category::Kind(expected) => kind == expected,
        }
    }
}

impl FromStr for Category {
    type Err = ArgyError;

    fn from_str(token: &str) -> Result<Self> {
        let lower = token.to_ascii_lowercase();
        let category = match lower.as_str() {
            "*" | "any" => Category::Any,
            "scalar" | "basic" => Category::Scalar,
            "ok" | "truey" => Category::Ok,
            "notok" | "falsy" => Category::NotOk,
            other => match ValueKind::from_label(other) {
                Some(kind) => Category::Kind(kind),
                None => {
                    return Err(ArgyError::UnknownMatcherToken {
                        token: token.to_string(),
                    })
                }
            },
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Any => f.write_str("*"),
            Category::Scalar => f.write_str("scalar"),
            Category::Ok => f.write_str("ok"),
            Category::NotOk => f.write_str("notok"),
            Category::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

/// Check `value` against a category token such as `"scalar"` or `"Array"`.
pub fn matches_category(value: &Value, category: &str) -> Result<bool> {
    Ok(category.parse::<Category>()?.matches(value))
}

/// Check `value` against several category tokens; true if any matches.
pub fn is_type(value: &Value, categories: &[&str]) -> Result<bool> {
    for token in categories {
        if matches_category(value, token)? {
            return Ok(true);
        }
    }
    Ok(false)
}
