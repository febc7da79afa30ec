//! Declarative command-line argument parsing and help generation.
//!
//! This crate is the engine over the types in [`argspec_core`]: it scans a
//! raw token stream, matches named and positional arguments against a
//! frozen [`Schema`](argspec_core::Schema), coerces values to each
//! property's declared kind, runs required-field and rule-based validation,
//! and renders usage and per-property help from the resulting report.
//!
//! Parsing never fails: every problem with the input — unknown arguments,
//! missing values, conversion failures, violated rules — is accumulated on
//! the returned [`ParseReport`], and the caller decides whether to treat
//! the error list as fatal. Only schema construction can return an error,
//! and it does so once, at build time.
//!
//! # Example
//!
//! ```
//! use argspec_core::{ArgProperty, Schema, Value, ValueKind};
//! use argspec_parser::parse_args;
//!
//! #[derive(Default)]
//! struct App {
//!     name: String,
//!     verbose: bool,
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
//!         .required(),
//!     )
//!     .property(ArgProperty::new(
//!         "Verbose",
//!         ValueKind::Bool,
//!         |app: &App| Value::from(app.verbose),
//!         |app, v| app.verbose = v.as_bool().unwrap_or(false),
//!     ))
//!     .build()
//!     .expect("schema should build");
//!
//! let results = parse_args(&schema, ["Bob", "/Verbose"]);
//! assert_eq!(results.target.name, "Bob");
//! assert!(results.target.verbose);
//! assert!(!results.report.has_errors());
//! ```

mod convert;
mod help;
mod query;
mod resolve;
mod results;
mod tokens;

pub use help::HelpGenerator;
pub use query::query_to_args;
pub use results::{ParseError, ParseReport, ParseResults, ResolvedProperty};
pub use tokens::{Token, scan};

use argspec_core::Schema;

/// Parses an argument list against the schema.
///
/// The caller passes the token list with the program-path entry already
/// removed (`std::env::args().skip(1)` for process arguments). Always
/// returns a fully-formed result; inspect
/// [`ParseReport::errors`](ParseReport) for problems.
pub fn parse_args<T, I, S>(schema: &Schema<T>, args: I) -> ParseResults<T>
where
    T: Default,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens = tokens::scan(schema.options(), args);
    resolve::run(schema, tokens)
}

/// Parses a URL query string against the schema.
///
/// The query string is decoded per [`query_to_args`] and then parsed like
/// an ordinary argument list.
pub fn parse_query<T: Default>(schema: &Schema<T>, query: &str) -> ParseResults<T> {
    let args = query_to_args(schema.options(), query);
    parse_args(schema, args)
}
