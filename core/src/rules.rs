//! Named validation rules.
//!
//! Rules are registered explicitly on a property declaration and evaluated
//! by the parser's validator after resolution completes. Each rule exposes a
//! check over the final value and a message template with the property name
//! substituted in; the help generator lists every rule's formatted message
//! under the property it constrains.
//!
//! Rules are not evaluated against empty values — requiredness is a separate
//! flag on the property, not a rule.

use regex::Regex;
use std::fmt;

use crate::Value;

/// A named validation rule over a final property value.
///
/// # Examples
///
/// ```
/// use argspec_core::{StringLength, Rule, Value};
///
/// let rule = StringLength::max(10);
/// assert!(rule.check(&Value::from("short")));
/// assert!(!rule.check(&Value::from("much too long for this")));
/// assert_eq!(
///     rule.message("Occupation"),
///     "Occupation must be no more than 10 characters."
/// );
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Whether the value satisfies this rule.
    fn check(&self, value: &Value) -> bool;

    /// The rule's message, formatted for the given property name.
    fn message(&self, property: &str) -> String;
}

/// Bounds the length of a text value.
#[derive(Debug, Clone)]
pub struct StringLength {
    min: Option<usize>,
    max: usize,
}

impl StringLength {
    /// A rule allowing at most `max` characters.
    pub fn max(max: usize) -> Self {
        Self { min: None, max }
    }

    /// A rule requiring between `min` and `max` characters.
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max,
        }
    }
}

impl Rule for StringLength {
    fn check(&self, value: &Value) -> bool {
        let Some(s) = value.as_str() else {
            return true;
        };
        let len = s.chars().count();
        len <= self.max && self.min.is_none_or(|min| len >= min)
    }

    fn message(&self, property: &str) -> String {
        match self.min {
            Some(min) => format!(
                "{property} must be between {min} and {} characters.",
                self.max
            ),
            None => format!("{property} must be no more than {} characters.", self.max),
        }
    }
}

/// Bounds a numeric value (integer or float) inclusively.
#[derive(Debug, Clone)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// A rule requiring `min <= value <= max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Rule for Range {
    fn check(&self, value: &Value) -> bool {
        let Some(n) = value.as_float() else {
            return true;
        };
        n >= self.min && n <= self.max
    }

    fn message(&self, property: &str) -> String {
        format!("{property} must be between {} and {}.", self.min, self.max)
    }
}

/// Requires a text value to match a regular expression.
#[derive(Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles the pattern. A compile failure is a schema-declaration
    /// defect, surfaced to the caller at build time.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Rule for Pattern {
    fn check(&self, value: &Value) -> bool {
        let Some(s) = value.as_str() else {
            return true;
        };
        self.regex.is_match(s)
    }

    fn message(&self, property: &str) -> String {
        format!("{property} must match the pattern {}.", self.regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_bounds() {
        let rule = StringLength::between(2, 4);
        assert!(!rule.check(&Value::from("a")));
        assert!(rule.check(&Value::from("abc")));
        assert!(!rule.check(&Value::from("abcde")));
        assert_eq!(
            rule.message("Name"),
            "Name must be between 2 and 4 characters."
        );
    }

    #[test]
    fn test_range_widens_integers() {
        let rule = Range::new(0.0, 150.0);
        assert!(rule.check(&Value::Int(42)));
        assert!(!rule.check(&Value::Int(200)));
        assert!(rule.check(&Value::Float(1.5)));
        assert_eq!(rule.message("Age"), "Age must be between 0 and 150.");
    }

    #[test]
    fn test_pattern_matches_text_only() {
        let rule = Pattern::new(r"^[A-Z][a-z]+$").expect("static pattern must compile");
        assert!(rule.check(&Value::from("Father")));
        assert!(!rule.check(&Value::from("father")));
        // Non-text values are not this rule's concern.
        assert!(rule.check(&Value::Int(3)));
    }

    #[test]
    fn test_rules_ignore_foreign_kinds() {
        assert!(StringLength::max(1).check(&Value::Int(123456)));
        assert!(Range::new(0.0, 1.0).check(&Value::from("not a number")));
    }
}
