//! Core types for declarative command-line parsing.
//!
//! This crate defines the foundational types the `argspec-parser` engine
//! consumes:
//!
//! - [`Value`] / [`ValueKind`] — the runtime value model for argument values
//!   and defaults.
//! - [`ArgProperty`] — a property descriptor carrying names, aliases,
//!   requiredness, display flags, validation rules, and typed accessors.
//! - [`ParseOptions`] — argument prefix, assignment delimiter, and the
//!   ordered positional-name list.
//! - [`Schema`] / [`SchemaBuilder`] — build-once-then-freeze descriptor
//!   sets with fatal build-time validation ([`SchemaError`]).
//! - [`Rule`] and the shipped rules ([`StringLength`], [`Range`],
//!   [`Pattern`]) — explicit, named validation registered per property.
//!
//! # Example
//!
//! ```
//! use argspec_core::*;
//!
//! #[derive(Default)]
//! struct App {
//!     name: String,
//!     age: i64,
//! }
//!
//! let schema = Schema::<App>::builder()
//!     .positional(["Name"])
//!     .property(
//!         ArgProperty::new(
//!             "Name",
//!             ValueKind::Str,
//!             |app: &App| Value::from(app.name.clone()),
//!             |app, v| {
//!                 if let Some(s) = v.as_str() {
//!                     app.name = s.to_string();
//!                 }
//!             },
//!         )
//!         .required()
//!         .describe("The person's name."),
//!     )
//!     .property(
//!         ArgProperty::new(
//!             "Age",
//!             ValueKind::Int,
//!             |app: &App| Value::from(app.age),
//!             |app, v| app.age = v.as_int().unwrap_or_default(),
//!         )
//!         .rule(Range::new(0.0, 150.0)),
//!     )
//!     .build()
//!     .expect("schema should build");
//!
//! assert!(schema.find("name").is_some());
//! assert_eq!(schema.properties().len(), 2);
//! ```

mod error;
mod rules;
mod schema;
mod value;

pub use error::SchemaError;
pub use rules::{Pattern, Range, Rule, StringLength};
pub use schema::{ArgProperty, DefaultLookup, Getter, ParseOptions, Schema, SchemaBuilder, Setter};
pub use value::{Value, ValueKind};
