//! Raw token to [`Value`] coercion.
//!
//! Conversion rules are fixed and locale-independent. A failure returns the
//! human-readable reason; the resolver wraps it into a conversion error and
//! leaves the property at its default.

use argspec_core::{Value, ValueKind};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Converts a single raw token to the declared kind.
///
/// List kinds are handled by [`convert_list`]; passing one here converts a
/// single token as a one-element list (the positional-binding case).
pub(crate) fn convert_one(kind: &ValueKind, raw: &str) -> Result<Value, String> {
    match kind {
        ValueKind::Bool => parse_bool(raw),
        ValueKind::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| format!("'{raw}' is not a valid integer.")),
        ValueKind::Float => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| format!("'{raw}' is not a valid number.")),
        ValueKind::Str => Ok(Value::Str(raw.to_string())),
        ValueKind::Date => parse_date(raw),
        ValueKind::DateTime => parse_datetime(raw),
        ValueKind::Enum(members) => members
            .iter()
            .find(|member| member.eq_ignore_ascii_case(raw.trim()))
            .map(|member| Value::Str(member.clone()))
            .ok_or_else(|| {
                format!(
                    "'{raw}' is not a valid value. Expected one of: {}.",
                    members.join("|")
                )
            }),
        ValueKind::List(element) => convert_list(element, &[raw.to_string()]),
    }
}

/// Converts collected tokens to a list of the element kind.
///
/// Any single element failure fails the whole conversion with one
/// aggregated reason; zero elements is a valid, empty list.
pub(crate) fn convert_list(element: &ValueKind, raws: &[String]) -> Result<Value, String> {
    let mut items = Vec::with_capacity(raws.len());
    let mut failures = Vec::new();

    for raw in raws {
        match convert_one(element, raw) {
            Ok(value) => items.push(value),
            Err(reason) => failures.push(reason),
        }
    }

    if failures.is_empty() {
        Ok(Value::List(items))
    } else {
        Err(failures.join(" "))
    }
}

fn parse_bool(raw: &str) -> Result<Value, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(Value::Bool(true)),
        "false" | "no" | "0" => Ok(Value::Bool(false)),
        _ => Err(format!("'{raw}' is not a valid boolean.")),
    }
}

fn parse_date(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(Value::Date)
        .ok_or_else(|| format!("'{raw}' is not a valid date."))
}

fn parse_datetime(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            // Date-only input reads as midnight.
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    parsed
        .map(Value::DateTime)
        .ok_or_else(|| format!("'{raw}' is not a valid date/time."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_accepts_fixed_spellings() {
        assert_eq!(convert_one(&ValueKind::Bool, "true"), Ok(Value::Bool(true)));
        assert_eq!(convert_one(&ValueKind::Bool, "YES"), Ok(Value::Bool(true)));
        assert_eq!(convert_one(&ValueKind::Bool, "0"), Ok(Value::Bool(false)));
        assert!(convert_one(&ValueKind::Bool, "oui").is_err());
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(convert_one(&ValueKind::Int, " 42 "), Ok(Value::Int(42)));
        assert_eq!(
            convert_one(&ValueKind::Float, "1.5"),
            Ok(Value::Float(1.5))
        );
        assert!(convert_one(&ValueKind::Int, "4.2").is_err());
        assert!(convert_one(&ValueKind::Int, "forty").is_err());
    }

    #[test]
    fn test_date_formats_are_fixed() {
        let expected = NaiveDate::from_ymd_opt(1980, 6, 15).unwrap();
        assert_eq!(
            convert_one(&ValueKind::Date, "1980-06-15"),
            Ok(Value::Date(expected))
        );
        assert_eq!(
            convert_one(&ValueKind::Date, "06/15/1980"),
            Ok(Value::Date(expected))
        );
        assert!(convert_one(&ValueKind::Date, "15.06.1980").is_err());
    }

    #[test]
    fn test_datetime_accepts_date_only_as_midnight() {
        let value = convert_one(&ValueKind::DateTime, "1980-06-15").unwrap();
        assert_eq!(
            value,
            Value::DateTime(
                NaiveDate::from_ymd_opt(1980, 6, 15)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn test_enum_is_case_insensitive_and_canonicalizes() {
        let kind = ValueKind::enumeration(["Father", "Mother", "Child"]);
        assert_eq!(
            convert_one(&kind, "mother"),
            Ok(Value::Str("Mother".to_string()))
        );
        let err = convert_one(&kind, "Uncle").unwrap_err();
        assert!(err.contains("Father|Mother|Child"));
    }

    #[test]
    fn test_list_aggregates_element_failures() {
        let element = ValueKind::Int;
        let ok = convert_list(
            &element,
            &["1".to_string(), "2".to_string(), "3".to_string()],
        )
        .unwrap();
        assert_eq!(
            ok,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );

        let err = convert_list(&element, &["1".to_string(), "x".to_string(), "y".to_string()])
            .unwrap_err();
        assert!(err.contains("'x'"));
        assert!(err.contains("'y'"));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(
            convert_list(&ValueKind::Str, &[]),
            Ok(Value::List(Vec::new()))
        );
    }
}
