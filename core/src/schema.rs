//! Property descriptors, parse options, and schema building.
//!
//! A [`Schema`] is the ordered set of [`ArgProperty`] descriptors derived
//! from a target type's declared argument metadata, plus the
//! [`ParseOptions`] governing how tokens are read. Schemas are built once
//! per target type through [`SchemaBuilder`] and frozen; a built schema is
//! read-only and may be shared across concurrent parses (a `LazyLock` at the
//! call site is the intended idiom).
//!
//! Structural defects in the declaration — duplicate names or aliases, a
//! positional name that matches nothing, a non-primitive list element — are
//! fatal [`SchemaError`]s raised by [`SchemaBuilder::build`], never during a
//! parse.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Rule, SchemaError, Value, ValueKind};

/// Reads a property's current value off the target.
pub type Getter<T> = fn(&T) -> Value;

/// Writes a converted value onto the target.
pub type Setter<T> = fn(&mut T, &Value);

/// Opaque default-value source consulted at build time, by property name,
/// before the fresh-instance capture.
pub type DefaultLookup = fn(&str) -> Option<Value>;

/// Options governing how a token stream is read.
///
/// # Examples
///
/// ```
/// use argspec_core::ParseOptions;
///
/// let options = ParseOptions::default();
/// assert_eq!(options.argument_prefix, "/");
/// assert_eq!(options.assignment_delimiter, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Marker identifying a token as a named argument (default `/`).
    pub argument_prefix: String,
    /// Delimiter between an argument name and its value within a single
    /// token. `None` means values arrive as separate, whitespace-split
    /// tokens.
    pub assignment_delimiter: Option<String>,
    /// Ordered names of the properties filled positionally when no prefix
    /// is present on the input token.
    pub positional: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            argument_prefix: "/".to_string(),
            assignment_delimiter: None,
            positional: Vec::new(),
        }
    }
}

impl ParseOptions {
    /// The delimiter to split `name<delim>value` tokens on, if one is
    /// configured. Whitespace-only delimiters behave as `None`.
    pub fn effective_delimiter(&self) -> Option<&str> {
        match self.assignment_delimiter.as_deref() {
            Some(d) if !d.trim().is_empty() => Some(d),
            _ => None,
        }
    }

    /// The delimiter text shown between a name and its value in usage
    /// output; whitespace separation renders as a single space.
    pub fn delimiter_display(&self) -> &str {
        self.effective_delimiter().unwrap_or(" ")
    }
}

/// Descriptor for one command-line property of the target type `T`.
///
/// Construct with [`ArgProperty::new`] and chain the builder methods, then
/// register on a [`SchemaBuilder`].
///
/// # Examples
///
/// ```
/// use argspec_core::{ArgProperty, Value, ValueKind};
///
/// #[derive(Default)]
/// struct App {
///     name: String,
/// }
///
/// let prop = ArgProperty::<App>::new(
///     "Name",
///     ValueKind::Str,
///     |app: &App| Value::from(app.name.clone()),
///     |app, v| {
///         if let Some(s) = v.as_str() {
///             app.name = s.to_string();
///         }
///     },
/// )
/// .required()
/// .describe("The person's name.");
///
/// assert!(prop.matches("name"));
/// assert_eq!(prop.usage_name(), "Name");
/// ```
pub struct ArgProperty<T> {
    name: String,
    aliases: Vec<String>,
    kind: ValueKind,
    required: bool,
    description: Option<String>,
    default: Option<Value>,
    show_in_help: bool,
    show_in_usage: Option<bool>,
    show_default_value: Option<bool>,
    positional: Option<usize>,
    rules: Vec<Box<dyn Rule>>,
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> std::fmt::Debug for ArgProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgProperty")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("positional", &self.positional)
            .finish_non_exhaustive()
    }
}

impl<T> ArgProperty<T> {
    /// Creates a descriptor with the given primary name, declared kind, and
    /// typed accessors.
    pub fn new(name: &str, kind: ValueKind, get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            kind,
            required: false,
            description: None,
            default: None,
            show_in_help: true,
            show_in_usage: None,
            show_default_value: None,
            positional: None,
            rules: Vec::new(),
            get,
            set,
        }
    }

    /// Adds an accepted alternate name.
    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Marks the property required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description shown in help output.
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Overrides the default value captured from a fresh target instance.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Controls whether the property appears in per-property help
    /// (default: shown).
    pub fn show_in_help(mut self, show: bool) -> Self {
        self.show_in_help = show;
        self
    }

    /// Controls whether the property appears on the usage line. Unset, a
    /// property is shown iff it is required.
    pub fn show_in_usage(mut self, show: bool) -> Self {
        self.show_in_usage = Some(show);
        self
    }

    /// Forces or suppresses the help's `Default:` line. Unset, the default
    /// is shown iff it is non-empty or the kind is an enumeration.
    pub fn show_default_value(mut self, show: bool) -> Self {
        self.show_default_value = Some(show);
        self
    }

    /// Registers a validation rule.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// The primary name, unique within the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted alternate names, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The declared value kind.
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Whether a value must be supplied (or a usable default exist).
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The help description, if declared.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The default value. Always present after a successful build.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether the property appears in per-property help.
    pub fn shown_in_help(&self) -> bool {
        self.show_in_help
    }

    /// Whether the property appears on the usage line.
    pub fn shown_in_usage(&self) -> bool {
        self.show_in_usage.unwrap_or(self.required)
    }

    /// The explicit `Default:`-line override, if declared.
    pub fn show_default_override(&self) -> Option<bool> {
        self.show_default_value
    }

    /// Zero-based position among positional properties, stamped at build
    /// from the options' positional-name list.
    pub fn positional_index(&self) -> Option<usize> {
        self.positional
    }

    /// The registered validation rules.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// The name displayed in usage output: the first alias when aliases
    /// exist, else the primary name.
    pub fn usage_name(&self) -> &str {
        self.aliases.first().map_or(self.name.as_str(), String::as_str)
    }

    /// Whether the given text matches the primary name or any alias,
    /// case-insensitively.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Reads the property's current value off the target.
    pub fn value_of(&self, target: &T) -> Value {
        (self.get)(target)
    }

    /// Writes a converted value onto the target.
    pub fn apply(&self, target: &mut T, value: &Value) {
        (self.set)(target, value);
    }
}

/// The frozen, ordered descriptor set for a target type.
///
/// # Examples
///
/// ```
/// use argspec_core::{ArgProperty, Schema, Value, ValueKind};
///
/// #[derive(Default)]
/// struct App {
///     verbose: bool,
/// }
///
/// let schema = Schema::<App>::builder()
///     .property(ArgProperty::new(
///         "Verbose",
///         ValueKind::Bool,
///         |app: &App| Value::from(app.verbose),
///         |app, v| app.verbose = v.as_bool().unwrap_or(false),
///     ))
///     .build()
///     .expect("schema should build");
///
/// assert!(schema.find("verbose").is_some());
/// assert!(schema.find("quiet").is_none());
/// ```
#[derive(Debug)]
pub struct Schema<T> {
    options: ParseOptions,
    properties: Vec<ArgProperty<T>>,
}

impl<T: Default> Schema<T> {
    /// Starts a schema declaration.
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder {
            options: ParseOptions::default(),
            properties: Vec::new(),
            default_lookup: None,
        }
    }
}

impl<T> Schema<T> {
    /// The options this schema parses with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The descriptors, in declaration order.
    pub fn properties(&self) -> &[ArgProperty<T>] {
        &self.properties
    }

    /// Finds a descriptor by primary name or alias, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&ArgProperty<T>> {
        self.properties.iter().find(|prop| prop.matches(name))
    }

    /// Index of the descriptor matching the given name, if any.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|prop| prop.matches(name))
    }
}

/// Builder for a [`Schema`].
pub struct SchemaBuilder<T> {
    options: ParseOptions,
    properties: Vec<ArgProperty<T>>,
    default_lookup: Option<DefaultLookup>,
}

impl<T: Default> SchemaBuilder<T> {
    /// Replaces the parse options wholesale.
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the argument prefix (default `/`).
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.options.argument_prefix = prefix.to_string();
        self
    }

    /// Sets an explicit assignment delimiter (e.g. `=`).
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.options.assignment_delimiter = Some(delimiter.to_string());
        self
    }

    /// Declares the ordered positional property names.
    pub fn positional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.positional = names.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a property descriptor.
    pub fn property(mut self, property: ArgProperty<T>) -> Self {
        self.properties.push(property);
        self
    }

    /// Registers a default-value source consulted by name at build time.
    ///
    /// Properties the lookup does not answer for fall back to the value
    /// captured from a fresh target instance. An explicit per-property
    /// default wins over both.
    pub fn defaults(mut self, lookup: DefaultLookup) -> Self {
        self.default_lookup = Some(lookup);
        self
    }

    /// Validates the declaration and freezes the schema.
    ///
    /// Default values are captured here, once, from a fresh `T::default()`
    /// instance — before any argument is applied — unless a property
    /// declared an explicit default.
    pub fn build(mut self) -> Result<Schema<T>, SchemaError> {
        // Names and aliases share one namespace across the whole schema.
        let mut seen: HashSet<String> = HashSet::new();
        for prop in &self.properties {
            if !seen.insert(prop.name.to_ascii_lowercase()) {
                return Err(SchemaError::DuplicateName(prop.name.clone()));
            }
            for alias in &prop.aliases {
                if !seen.insert(alias.to_ascii_lowercase()) {
                    return Err(SchemaError::DuplicateAlias(alias.clone()));
                }
            }
        }

        for prop in &self.properties {
            match &prop.kind {
                ValueKind::Enum(members) => {
                    if members.is_empty() {
                        return Err(SchemaError::EmptyEnumeration(prop.name.clone()));
                    }
                    let mut seen_members: HashSet<String> = HashSet::new();
                    for member in members {
                        if !seen_members.insert(member.to_ascii_lowercase()) {
                            return Err(SchemaError::DuplicateEnumMember {
                                property: prop.name.clone(),
                                member: member.clone(),
                            });
                        }
                    }
                }
                ValueKind::List(element) => {
                    if !element.is_primitive() {
                        return Err(SchemaError::InvalidElementKind(prop.name.clone()));
                    }
                }
                _ => {}
            }
        }

        let positional = self.options.positional.clone();
        for (index, name) in positional.iter().enumerate() {
            let prop = self
                .properties
                .iter_mut()
                .find(|prop| prop.matches(name))
                .ok_or_else(|| SchemaError::UnknownPositional(name.clone()))?;
            prop.positional = Some(index);
        }

        let probe = T::default();
        for prop in &mut self.properties {
            if prop.default.is_none() {
                let captured = prop.value_of(&probe);
                prop.default = self
                    .default_lookup
                    .and_then(|lookup| lookup(&prop.name))
                    .or(Some(captured));
            }
        }

        Ok(Schema {
            options: self.options,
            properties: self.properties,
        })
    }
}
