//! Argument resolution.
//!
//! A single left-to-right pass over the classified token stream, matching
//! name tokens against descriptors and binding un-prefixed tokens to the
//! next unfilled positional descriptor. Every problem with the input is
//! recorded on the report and resolution continues — one parse surfaces the
//! complete error set.

use argspec_core::{ArgProperty, Schema, Value, ValueKind};
use std::iter::Peekable;
use tracing::{debug, warn};

use crate::convert;
use crate::results::{ParseError, ParseReport, ParseResults, ResolvedProperty};
use crate::tokens::Token;

/// Runs resolution, conversion, and validation over classified tokens.
pub(crate) fn run<T: Default>(schema: &Schema<T>, tokens: Vec<Token>) -> ParseResults<T> {
    let mut target = T::default();
    let count = schema.properties().len();

    // Per-descriptor resolution state, indexed like schema.properties().
    let mut supplied = vec![false; count];
    let mut resolved: Vec<Option<Value>> = vec![None; count];
    let mut errors: Vec<ParseError> = Vec::new();

    let mut positional_order: Vec<usize> = (0..count)
        .filter(|&idx| schema.properties()[idx].positional_index().is_some())
        .collect();
    positional_order.sort_by_key(|&idx| schema.properties()[idx].positional_index());

    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        match token {
            Token::Name { name, inline } => resolve_named(
                schema,
                &mut target,
                &name,
                inline,
                &mut iter,
                &mut supplied,
                &mut resolved,
                &mut errors,
            ),
            Token::Value(raw) => resolve_positional(
                schema,
                &mut target,
                raw,
                &positional_order,
                &mut supplied,
                &mut resolved,
                &mut errors,
            ),
        }
    }

    let properties = annotate(schema, &resolved);
    validate(schema, &supplied, &properties, &mut errors);

    let mut report = ParseReport::new(schema.options().clone());
    report.properties = properties;
    report.errors = errors;

    ParseResults { target, report }
}

#[allow(clippy::too_many_arguments)]
fn resolve_named<T, I: Iterator<Item = Token>>(
    schema: &Schema<T>,
    target: &mut T,
    name: &str,
    inline: Option<String>,
    iter: &mut Peekable<I>,
    supplied: &mut [bool],
    resolved: &mut [Option<Value>],
    errors: &mut Vec<ParseError>,
) {
    let Some(idx) = schema.find_index(name) else {
        warn!(argument = %name, "unknown argument");
        errors.push(ParseError::UnknownArgument(format!(
            "{}{}",
            schema.options().argument_prefix,
            name
        )));
        return;
    };

    let prop = &schema.properties()[idx];
    debug!(argument = %name, property = %prop.name(), "matched named argument");
    supplied[idx] = true;

    if let ValueKind::List(element) = prop.kind() {
        // Collect until the next name token or end of input; zero elements
        // is still a valid, empty assignment.
        let mut raws: Vec<String> = inline.into_iter().collect();
        while let Some(Token::Value(raw)) = iter.next_if(|t| matches!(t, Token::Value(_))) {
            raws.push(raw);
        }
        apply(
            prop,
            target,
            convert::convert_list(element, &raws),
            &mut resolved[idx],
            errors,
        );
        return;
    }

    if prop.kind().is_bool() && inline.is_none() {
        // Presence alone sets the flag; no value token is consumed.
        apply(prop, target, Ok(Value::Bool(true)), &mut resolved[idx], errors);
        return;
    }

    let raw = inline.or_else(|| {
        match iter.next_if(|t| matches!(t, Token::Value(_))) {
            Some(Token::Value(value)) => Some(value),
            _ => None,
        }
    });

    match raw {
        None => errors.push(ParseError::MissingValue(prop.name().to_string())),
        Some(raw) => apply(
            prop,
            target,
            convert::convert_one(prop.kind(), &raw),
            &mut resolved[idx],
            errors,
        ),
    }
}

fn resolve_positional<T>(
    schema: &Schema<T>,
    target: &mut T,
    raw: String,
    positional_order: &[usize],
    supplied: &mut [bool],
    resolved: &mut [Option<Value>],
    errors: &mut Vec<ParseError>,
) {
    let Some(&idx) = positional_order.iter().find(|&&idx| !supplied[idx]) else {
        errors.push(ParseError::UnexpectedValue(raw));
        return;
    };

    let prop = &schema.properties()[idx];
    debug!(property = %prop.name(), value = %raw, "bound positional value");
    supplied[idx] = true;
    apply(
        prop,
        target,
        convert::convert_one(prop.kind(), &raw),
        &mut resolved[idx],
        errors,
    );
}

fn apply<T>(
    prop: &ArgProperty<T>,
    target: &mut T,
    converted: Result<Value, String>,
    slot: &mut Option<Value>,
    errors: &mut Vec<ParseError>,
) {
    match converted {
        Ok(value) => {
            prop.apply(target, &value);
            *slot = Some(value);
        }
        Err(reason) => errors.push(ParseError::Conversion {
            property: prop.name().to_string(),
            reason,
        }),
    }
}

/// Annotates every descriptor with its final resolution state.
fn annotate<T>(schema: &Schema<T>, resolved: &[Option<Value>]) -> Vec<ResolvedProperty> {
    schema
        .properties()
        .iter()
        .enumerate()
        .map(|(idx, prop)| {
            let default = prop.default().cloned();
            let value = resolved[idx].clone().or_else(|| default.clone());
            let is_set = resolved[idx].is_some();
            let is_changed = match (&resolved[idx], &default) {
                (Some(v), Some(d)) => v != d,
                (Some(_), None) => true,
                _ => false,
            };

            ResolvedProperty {
                name: prop.name().to_string(),
                aliases: prop.aliases().to_vec(),
                kind: prop.kind().clone(),
                required: prop.is_required(),
                description: prop.description().map(String::from),
                default,
                value,
                is_set,
                is_changed,
                show_in_help: prop.shown_in_help(),
                show_in_usage: prop.shown_in_usage(),
                show_default_value: prop.show_default_override(),
                positional: prop.positional_index(),
                rule_messages: prop
                    .rules()
                    .iter()
                    .map(|rule| rule.message(prop.name()))
                    .collect(),
            }
        })
        .collect()
}

/// Required-field and rule-based checks over the final values.
///
/// Every rule for every descriptor is evaluated; validation never stops at
/// the first failure.
fn validate<T>(
    schema: &Schema<T>,
    supplied: &[bool],
    properties: &[ResolvedProperty],
    errors: &mut Vec<ParseError>,
) {
    for (idx, prop) in schema.properties().iter().enumerate() {
        if prop.is_required() && !supplied[idx] {
            let usable_default = prop.default().is_some_and(|d| !d.is_empty());
            if !usable_default {
                errors.push(ParseError::RequiredMissing(prop.name().to_string()));
            }
        }

        let Some(value) = &properties[idx].value else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        for rule in prop.rules() {
            if !rule.check(value) {
                errors.push(ParseError::Rule {
                    property: prop.name().to_string(),
                    message: rule.message(prop.name()),
                });
            }
        }
    }
}
