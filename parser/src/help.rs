//! Usage and help text generation.
//!
//! A read-only consumer of the [`ParseReport`]. The usage line and
//! per-property help are exact textual contracts; line wrapping and color
//! belong to the console writer, not to this generator.

use argspec_core::ValueKind;

use crate::results::{ParseReport, ResolvedProperty};

/// Renders usage and help text from a parse report.
///
/// # Examples
///
/// ```
/// use argspec_core::{ArgProperty, Schema, Value, ValueKind};
/// use argspec_parser::{HelpGenerator, parse_args};
///
/// #[derive(Default)]
/// struct App {
///     name: String,
/// }
///
/// let schema = Schema::<App>::builder()
///     .positional(["Name"])
///     .property(
///         ArgProperty::new(
///             "Name",
///             ValueKind::Str,
///             |app: &App| Value::from(app.name.clone()),
///             |app, v| {
///                 if let Some(s) = v.as_str() {
///                     app.name = s.to_string();
///                 }
///             },
///         )
///         .required(),
///     )
///     .build()
///     .expect("schema should build");
///
/// let mut results = parse_args(&schema, ["Bob"]);
/// results.report.application_file_name = "app.exe".to_string();
///
/// let help = HelpGenerator::new(&results.report);
/// assert_eq!(help.usage(), "app.exe <Name|String>");
/// ```
pub struct HelpGenerator<'a> {
    report: &'a ParseReport,
}

impl<'a> HelpGenerator<'a> {
    /// Creates a generator over the given report.
    pub fn new(report: &'a ParseReport) -> Self {
        Self { report }
    }

    /// The usage line: the application file name followed by one segment
    /// per show-in-usage property, positional properties first.
    ///
    /// Positional segments render as `<name|type>` (bracketed when
    /// optional); named segments as `{prefix}{name}{delimiter}<type>`,
    /// the whole segment bracketed when optional.
    pub fn usage(&self) -> String {
        let options = &self.report.options;
        let mut usage = String::new();
        usage.push_str(&self.report.application_file_name);

        let positional = self.report.positional_properties();
        for prop in positional.iter().filter(|prop| prop.show_in_usage) {
            let segment = format!("{}|{}", prop.usage_name(), prop.type_display());
            if prop.required {
                usage.push_str(&format!(" <{segment}>"));
            } else {
                usage.push_str(&format!(" [<{segment}>]"));
            }
        }

        let named = self
            .report
            .properties
            .iter()
            .filter(|prop| prop.show_in_usage && prop.positional.is_none());
        for prop in named {
            let segment = format!(
                "{}{}{}<{}>",
                options.argument_prefix,
                prop.usage_name(),
                options.delimiter_display(),
                prop.type_display()
            );
            if prop.required {
                usage.push_str(&format!(" {segment}"));
            } else {
                usage.push_str(&format!(" [{segment}]"));
            }
        }

        usage
    }

    /// The help block for one property.
    ///
    /// Returns an empty string for properties hidden from help, signaling
    /// the caller to omit them from output.
    pub fn property_help(&self, prop: &ResolvedProperty) -> String {
        if !prop.show_in_help {
            return String::new();
        }

        let prefix = &self.report.options.argument_prefix;
        let mut help = format!("{prefix}{}", prop.name);

        if !prop.aliases.is_empty() {
            let aliases = prop
                .aliases
                .iter()
                .map(|alias| format!("{prefix}{alias}"))
                .collect::<Vec<_>>()
                .join(" | ");
            help.push_str(&format!(" ({aliases})"));
        }

        help.push_str(&format!(" <{}>", prop.type_display()));

        if prop.required {
            help.push_str(" REQUIRED");
        }

        if let Some(description) = &prop.description {
            help.push_str(&format!("\n\t{description}"));
        }

        if let Some(default) = self.displayable_default(prop) {
            help.push_str(&format!("\n\tDefault: {default}"));
        }

        for message in &prop.rule_messages {
            help.push_str(&format!("\n\t{message}"));
        }

        help
    }

    /// The full help screen: error block, `[USAGE]` section, and one block
    /// per visible property under `[LIST OF VALID ARGUMENTS]`.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.report.has_errors() {
            out.push_str("An error has occurred.\n");
            for message in self.report.error_messages() {
                out.push_str(&format!(" > {message}\n"));
            }
            out.push('\n');
        }

        out.push_str("[USAGE]\n\n");
        out.push_str(&self.usage());
        out.push('\n');

        let blocks: Vec<String> = self
            .report
            .properties
            .iter()
            .map(|prop| self.property_help(prop))
            .filter(|block| !block.is_empty())
            .collect();
        if !blocks.is_empty() {
            out.push_str("\n[LIST OF VALID ARGUMENTS]\n");
            for block in blocks {
                out.push('\n');
                out.push_str(&block);
                out.push('\n');
            }
        }

        out
    }

    /// The default value to display, if one should be shown: an explicit
    /// override wins; otherwise a default is shown iff it is non-empty or
    /// the kind is an enumeration.
    fn displayable_default(&self, prop: &ResolvedProperty) -> Option<String> {
        let default = prop.default.as_ref()?;
        let show = match prop.show_default_value {
            Some(show) => show,
            None => !default.is_empty() || matches!(prop.kind, ValueKind::Enum(_)),
        };
        show.then(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argspec_core::{ParseOptions, Value};

    fn text_prop(name: &str) -> ResolvedProperty {
        ResolvedProperty {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Str,
            required: false,
            description: None,
            default: Some(Value::Str(String::new())),
            value: None,
            is_set: false,
            is_changed: false,
            show_in_help: true,
            show_in_usage: false,
            show_default_value: None,
            positional: None,
            rule_messages: Vec::new(),
        }
    }

    #[test]
    fn test_hidden_property_yields_empty_help() {
        let report = ParseReport::new(ParseOptions::default());
        let generator = HelpGenerator::new(&report);

        let mut prop = text_prop("Secret");
        prop.show_in_help = false;
        assert_eq!(generator.property_help(&prop), "");
    }

    #[test]
    fn test_default_override_forces_display() {
        let report = ParseReport::new(ParseOptions::default());
        let generator = HelpGenerator::new(&report);

        // Empty default is normally hidden.
        let prop = text_prop("Name");
        assert!(!generator.property_help(&prop).contains("Default:"));

        let mut forced = text_prop("Name");
        forced.show_default_value = Some(true);
        assert!(generator.property_help(&forced).contains("Default: "));

        let mut suppressed = text_prop("Name");
        suppressed.default = Some(Value::from("Bob"));
        suppressed.show_default_value = Some(false);
        assert!(!generator.property_help(&suppressed).contains("Default:"));
    }

    #[test]
    fn test_render_lists_errors_before_usage() {
        let mut report = ParseReport::new(ParseOptions::default());
        report.application_file_name = "app.exe".to_string();
        report
            .errors
            .push(crate::ParseError::RequiredMissing("Name".to_string()));

        let generator = HelpGenerator::new(&report);
        let rendered = generator.render();
        let errors_at = rendered.find(" > Name is required.").expect("error line");
        let usage_at = rendered.find("[USAGE]").expect("usage section");
        assert!(errors_at < usage_at);
    }

    #[test]
    fn test_explicit_delimiter_appears_in_usage() {
        let mut report = ParseReport::new(ParseOptions {
            assignment_delimiter: Some("=".to_string()),
            ..ParseOptions::default()
        });
        report.application_file_name = "app.exe".to_string();
        let mut prop = text_prop("Name");
        prop.show_in_usage = true;
        report.properties.push(prop);

        let generator = HelpGenerator::new(&report);
        assert_eq!(generator.usage(), "app.exe [/Name=<String>]");
    }
}
