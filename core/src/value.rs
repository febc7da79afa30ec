//! Runtime value model for argument values and defaults.
//!
//! This module defines the dynamically-typed values that flow between the
//! token converter, the target instance, and the help generator. A parsed
//! argument becomes a [`Value`]; a property declares the [`ValueKind`] it
//! expects.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime argument value.
///
/// Values are produced by the type converter and captured from a fresh
/// target instance as per-property defaults. The `Display` impl renders the
/// exact text used by the help generator's `Default:` lines.
///
/// # Examples
///
/// ```
/// use argspec_core::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.to_string(), "hello");
///
/// let list = Value::List(vec![Value::from("One"), Value::from("Two")]);
/// assert_eq!(list.to_string(), r#"["One", "Two"]"#);
///
/// let nums = Value::List(vec![Value::Int(1), Value::Int(2)]);
/// assert_eq!(nums.to_string(), "[1, 2]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value. Enumeration values are stored as the member's declared
    /// spelling.
    Str(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time, without an offset.
    DateTime(NaiveDateTime),
    /// Ordered sequence of primitive values.
    List(Vec<Value>),
}

impl Value {
    /// Whether this value is the "empty" value of its kind.
    ///
    /// Empty means: empty string, empty list, `false`, numeric zero, or the
    /// epoch date/datetime. Emptiness gates whether a default satisfies a
    /// required property and whether the help shows a `Default:` line.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Value;
    ///
    /// assert!(Value::Str(String::new()).is_empty());
    /// assert!(Value::Bool(false).is_empty());
    /// assert!(Value::Int(0).is_empty());
    /// assert!(!Value::from("Father").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Date(d) => *d == NaiveDate::default(),
            Value::DateTime(dt) => *dt == NaiveDateTime::default(),
            Value::List(items) => items.is_empty(),
        }
    }

    /// Returns the boolean content, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float content, widening `Int` as needed.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the text content, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the date content, if this is a `Date`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the elements, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the elements as strings, if this is a list of text values.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        let items = self.as_list()?;
        items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Value::List(items) => {
                // Text elements are quoted, every other element kind is not.
                let all_text = items.iter().all(|item| matches!(item, Value::Str(_)));
                let rendered = items
                    .iter()
                    .map(|item| {
                        if all_text {
                            format!("\"{item}\"")
                        } else {
                            item.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items.into_iter().map(Value::Str).collect())
    }
}

/// Declared kind of a property's value.
///
/// The kind drives token conversion and the `type-display` text in usage and
/// help output.
///
/// # Examples
///
/// ```
/// use argspec_core::ValueKind;
///
/// assert_eq!(ValueKind::Str.display_name(), "String");
///
/// let person = ValueKind::enumeration(["Father", "Mother", "Child"]);
/// assert_eq!(person.display_name(), "Father|Mother|Child");
///
/// let children = ValueKind::List(Box::new(ValueKind::Str));
/// assert_eq!(children.display_name(), "String[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean flag; presence of the name token alone sets it true.
    Bool,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Text.
    Str,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// One of a fixed set of member names, matched case-insensitively.
    Enum(Vec<String>),
    /// Ordered sequence of a primitive element kind.
    List(Box<ValueKind>),
}

impl ValueKind {
    /// Creates an enumeration kind from member names.
    pub fn enumeration<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueKind::Enum(members.into_iter().map(Into::into).collect())
    }

    /// Creates a list kind over the given element kind.
    pub fn list(element: ValueKind) -> Self {
        ValueKind::List(Box::new(element))
    }

    /// The display text used for this kind in usage and help output.
    ///
    /// Enumerations render their member names joined with `|`; lists render
    /// as `{element}[]`.
    pub fn display_name(&self) -> String {
        match self {
            ValueKind::Bool => "Boolean".to_string(),
            ValueKind::Int => "Integer".to_string(),
            ValueKind::Float => "Float".to_string(),
            ValueKind::Str => "String".to_string(),
            ValueKind::Date => "Date".to_string(),
            ValueKind::DateTime => "DateTime".to_string(),
            ValueKind::Enum(members) => members.join("|"),
            ValueKind::List(element) => format!("{}[]", element.display_name()),
        }
    }

    /// Whether this kind may be the element of a list.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ValueKind::Enum(_) | ValueKind::List(_))
    }

    /// Whether this kind is a boolean flag.
    pub fn is_bool(&self) -> bool {
        matches!(self, ValueKind::Bool)
    }

    /// Whether this kind is an ordered sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, ValueKind::List(_))
    }

    /// Whether this kind is an enumeration.
    pub fn is_enum(&self) -> bool {
        matches!(self, ValueKind::Enum(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_text_lists_only() {
        let text = Value::from(vec!["One".to_string(), "Two".to_string(), "Three".to_string()]);
        assert_eq!(text.to_string(), r#"["One", "Two", "Three"]"#);

        let nums = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(nums.to_string(), "[1, 2]");
    }

    #[test]
    fn test_emptiness_mirrors_default_of_kind() {
        assert!(Value::Str(String::new()).is_empty());
        assert!(Value::List(Vec::new()).is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::Int(0).is_empty());
        assert!(Value::Date(NaiveDate::default()).is_empty());

        assert!(!Value::from("x").is_empty());
        assert!(!Value::Bool(true).is_empty());
        assert!(!Value::Int(7).is_empty());
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ValueKind::Bool.display_name(), "Boolean");
        assert_eq!(
            ValueKind::enumeration(["Father", "Mother", "Child"]).display_name(),
            "Father|Mother|Child"
        );
        assert_eq!(
            ValueKind::list(ValueKind::Int).display_name(),
            "Integer[]"
        );
    }

    #[test]
    fn test_value_serializes_untagged() {
        let v = Value::from(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&v).expect("value should serialize");
        assert_eq!(json, r#"["a","b"]"#);
    }
}
