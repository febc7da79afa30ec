//! Parse results and the serializable run report.
//!
//! A parse always yields a fully-formed [`ParseResults`]: the populated
//! target instance plus a [`ParseReport`] — the non-generic, serializable
//! record of per-property resolution state and every error accumulated
//! along the way. The report is append-only while the engine runs and
//! immutable once returned; the help generator is a read-only consumer.

use argspec_core::{ParseOptions, Value, ValueKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One accumulated parse or validation error.
///
/// Every variant is recorded, never thrown; only schema construction is
/// fatal (see [`argspec_core::SchemaError`]). The `Display` impl is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseError {
    /// A name token matched no descriptor.
    #[error("Unknown argument '{0}'.")]
    UnknownArgument(String),
    /// A named, non-flag, non-list descriptor matched but no value token
    /// followed.
    #[error("{0} requires a value.")]
    MissingValue(String),
    /// A value was present but not coercible to the declared kind.
    #[error("The value for {property} is not valid. {reason}")]
    Conversion {
        /// The property the value was bound to.
        property: String,
        /// Why conversion failed.
        reason: String,
    },
    /// An un-prefixed token arrived after every positional descriptor was
    /// filled.
    #[error("Unexpected value '{0}'.")]
    UnexpectedValue(String),
    /// A required descriptor never received a value and has no usable
    /// default.
    #[error("{0} is required.")]
    RequiredMissing(String),
    /// A declared validation rule rejected the final value.
    #[error("{message}")]
    Rule {
        /// The property the rule constrains.
        property: String,
        /// The rule's formatted message.
        message: String,
    },
}

/// A descriptor annotated with its resolution state.
///
/// Carries everything the help generator and report consumers need without
/// referring back to the target type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProperty {
    /// Primary name, unique within the schema.
    pub name: String,
    /// Accepted alternate names, in declaration order.
    pub aliases: Vec<String>,
    /// Declared value kind.
    pub kind: ValueKind,
    /// Whether a value had to be supplied.
    pub required: bool,
    /// Help description, if declared.
    pub description: Option<String>,
    /// Default captured at schema build.
    pub default: Option<Value>,
    /// Final value: the resolved value, else the default.
    pub value: Option<Value>,
    /// Whether a token supplied this property during the parse.
    pub is_set: bool,
    /// Whether the final value differs from the default.
    pub is_changed: bool,
    /// Whether the property appears in per-property help.
    pub show_in_help: bool,
    /// Whether the property appears on the usage line.
    pub show_in_usage: bool,
    /// Explicit `Default:`-line override; `None` applies the heuristic.
    pub show_default_value: Option<bool>,
    /// Zero-based position among positional properties, if positional.
    pub positional: Option<usize>,
    /// Every declared rule's message, formatted for this property.
    pub rule_messages: Vec<String>,
}

impl ResolvedProperty {
    /// The name displayed in usage output: first alias, else primary name.
    pub fn usage_name(&self) -> &str {
        self.aliases.first().map_or(self.name.as_str(), String::as_str)
    }

    /// The `type-display` text for this property.
    pub fn type_display(&self) -> String {
        self.kind.display_name()
    }
}

/// The read-after-parse record.
///
/// # Examples
///
/// ```
/// use argspec_parser::ParseReport;
///
/// let report = ParseReport::new(Default::default());
/// assert!(!report.has_errors());
/// assert!(report.properties.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Application file name shown at the head of the usage line. Empty
    /// unless the caller supplies one.
    pub application_file_name: String,
    /// Application title, shown before help output when present.
    pub title: Option<String>,
    /// Application description.
    pub description: Option<String>,
    /// Application copyright line.
    pub copyright: Option<String>,
    /// The options the parse ran with.
    pub options: ParseOptions,
    /// Descriptors annotated with resolution state, in declaration order.
    pub properties: Vec<ResolvedProperty>,
    /// Accumulated errors, in the order they were recorded.
    pub errors: Vec<ParseError>,
}

impl ParseReport {
    /// An empty report over the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            application_file_name: String::new(),
            title: None,
            description: None,
            copyright: None,
            options,
            properties: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whether any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The user-facing message for every recorded error, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Finds a property by primary name or alias, case-insensitively.
    pub fn property(&self, name: &str) -> Option<&ResolvedProperty> {
        self.properties.iter().find(|prop| {
            prop.name.eq_ignore_ascii_case(name)
                || prop
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// Positional properties in their declared positional order.
    pub fn positional_properties(&self) -> Vec<&ResolvedProperty> {
        let mut positional: Vec<&ResolvedProperty> = self
            .properties
            .iter()
            .filter(|prop| prop.positional.is_some())
            .collect();
        positional.sort_by_key(|prop| prop.positional);
        positional
    }
}

/// The populated target plus its run report.
#[derive(Debug)]
pub struct ParseResults<T> {
    /// The populated target instance. Inspectable even when the report
    /// carries errors; whether to act on it is caller policy.
    pub target: T,
    /// The per-property resolution record and error list.
    pub report: ParseReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str, positional: Option<usize>) -> ResolvedProperty {
        ResolvedProperty {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Str,
            required: false,
            description: None,
            default: None,
            value: None,
            is_set: false,
            is_changed: false,
            show_in_help: true,
            show_in_usage: false,
            show_default_value: None,
            positional,
            rule_messages: Vec::new(),
        }
    }

    #[test]
    fn test_positional_properties_are_ordered() {
        let mut report = ParseReport::new(ParseOptions::default());
        report.properties.push(prop("B", Some(1)));
        report.properties.push(prop("C", None));
        report.properties.push(prop("A", Some(0)));

        let names: Vec<&str> = report
            .positional_properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_property_lookup_is_case_insensitive() {
        let mut report = ParseReport::new(ParseOptions::default());
        let mut aliased = prop("PersonType", None);
        aliased.aliases.push("Type".to_string());
        report.properties.push(aliased);

        assert!(report.property("persontype").is_some());
        assert!(report.property("TYPE").is_some());
        assert!(report.property("Unknown").is_none());
    }

    #[test]
    fn test_error_messages_render_display() {
        let mut report = ParseReport::new(ParseOptions::default());
        report
            .errors
            .push(ParseError::UnknownArgument("/Nope".to_string()));
        report
            .errors
            .push(ParseError::RequiredMissing("Name".to_string()));

        assert_eq!(
            report.error_messages(),
            vec![
                "Unknown argument '/Nope'.".to_string(),
                "Name is required.".to_string(),
            ]
        );
    }
}
