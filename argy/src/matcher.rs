//! Compiled type specifications.
//!
//! A type specification such as `"string|array"` or `"number, null"` is
//! compiled once, at declaration time, into a [`Matcher`] holding the
//! union of its categories.

use std::fmt;

use crate::category::Category;
use crate::error::Result;
use crate::value::Value;

/// A union-of-categories predicate over one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    categories: Vec<Category>,
}

impl Matcher {
    /// A matcher that accepts every value.
    pub fn any() -> Self {
        Self {
            categories: vec![Category::Any],
        }
    }

    /// Compile a type specification.
    ///
    /// Tokens are separated by any run of whitespace, commas or pipes. An
    /// absent or blank specification accepts anything. Unknown tokens are
    /// rejected here rather than when the matcher is first used.
    pub fn compile(spec: Option<&str>) -> Result<Self> {
        let Some(spec) = spec else {
            return Ok(Self::any());
        };

        let categories = spec
            .split(|c: char| c.is_whitespace() || c == ',' || c == '|')
            .filter(|token| !token.is_empty())
            .map(str::parse::<Category>)
            .collect::<Result<Vec<Category>>>()?;

        if categories.is_empty() {
            return Ok(Self::any());
        }
        Ok(Self { categories })
    }

    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories: Vec<_> = categories.into_iter().collect();
        if categories.is_empty() {
            Self::any()
        } else {
            Self { categories }
        }
    }

    /// True if any category accepts `value`.
    pub fn matches(&self, value: &Value) -> bool {
        self.categories.iter().any(|category| category.matches(value))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{category}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgyError;
    use crate::value::ValueKind;

    #[test]
    fn test_absent_and_blank_accept_anything() {
        for spec in [None, Some(""), Some("  , | ")] {
            let matcher = Matcher::compile(spec).unwrap();
            assert_eq!(matcher, Matcher::any());
            assert!(matcher.matches(&Value::Undefined));
            assert!(matcher.matches(&Value::from(vec![1, 2])));
        }
    }

    #[test]
    fn test_union_of_tokens() {
        let matcher = Matcher::compile(Some("string|array")).unwrap();
        assert!(matcher.matches(&Value::from("Felix")));
        assert!(matcher.matches(&Value::from(vec!["Glitch"])));
        assert!(!matcher.matches(&Value::from(3)));
    }

    #[test]
    fn test_mixed_separators() {
        let matcher = Matcher::compile(Some("number ,  null|| Boolean")).unwrap();
        assert_eq!(
            matcher.categories(),
            &[
                Category::Kind(ValueKind::Number),
                Category::Kind(ValueKind::Null),
                Category::Kind(ValueKind::Boolean),
            ]
        );
        assert_eq!(matcher.to_string(), "number|null|boolean");
    }

    #[test]
    fn test_unknown_token_fails_at_compile_time() {
        let err = Matcher::compile(Some("string strnig")).unwrap_err();
        assert!(matches!(err, ArgyError::UnknownMatcherToken { token } if token == "strnig"));
    }
}
