//! Query-string token source.
//!
//! Converts a URL query string into an argument list the resolver can
//! consume: each pair becomes `{prefix}{name}` followed by the decoded
//! value, and a pair without `=` becomes a bare flag token.

use argspec_core::ParseOptions;
use percent_encoding::percent_decode_str;

/// Converts a query string into an argument list.
///
/// Everything up to and including a leading `?` is stripped, as is a
/// trailing `#fragment`. Values are percent-decoded and `+` translates to a
/// space; names are trimmed and empty names are dropped.
///
/// # Examples
///
/// ```
/// use argspec_core::ParseOptions;
/// use argspec_parser::query_to_args;
///
/// let options = ParseOptions::default();
/// let args = query_to_args(&options, "?A=1&B=two+words&C");
/// assert_eq!(args, vec!["/A", "1", "/B", "two words", "/C"]);
/// ```
pub fn query_to_args(options: &ParseOptions, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut qs = query;
    if let Some(idx) = qs.find('?') {
        qs = &qs[idx + 1..];
    }
    if let Some(idx) = qs.rfind('#') {
        qs = &qs[..idx];
    }

    let mut args = Vec::new();
    for pair in qs.split('&') {
        let (name, value) = match pair.split_once('=') {
            // No '=' means a bare flag token.
            None => (pair.trim(), None),
            Some((name, raw)) => {
                let decoded = percent_decode_str(raw)
                    .decode_utf8_lossy()
                    // Percent-decoding does not translate '+'.
                    .replace('+', " ");
                (name.trim(), Some(decoded))
            }
        };

        if name.is_empty() {
            continue;
        }
        args.push(format!("{}{}", options.argument_prefix, name));
        if let Some(value) = value {
            args.push(value);
        }
    }

    args
}
