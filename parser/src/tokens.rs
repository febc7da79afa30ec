//! Token classification.
//!
//! The scanner turns a raw argument list into classified [`Token`]s: a token
//! beginning with the configured prefix is a name token, everything else is
//! a value token. When a non-whitespace assignment delimiter is configured,
//! a single `name<delim>value` token is split into a name token carrying an
//! inline value before resolution sees it.

use argspec_core::ParseOptions;

/// One classified input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A named-argument token: the text after the prefix, plus the inline
    /// value when the configured delimiter appeared within the token.
    Name {
        /// Argument name as typed, without the prefix.
        name: String,
        /// Value split off the same token, if any.
        inline: Option<String>,
    },
    /// A plain value token.
    Value(String),
}

/// Classifies a raw argument list against the given options.
pub fn scan<I, S>(options: &ParseOptions, raw: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let prefix = options.argument_prefix.as_str();
    let delimiter = options.effective_delimiter();

    raw.into_iter()
        .map(|arg| classify(arg.into(), prefix, delimiter))
        .collect()
}

fn classify(arg: String, prefix: &str, delimiter: Option<&str>) -> Token {
    let Some(rest) = arg.strip_prefix(prefix) else {
        return Token::Value(arg);
    };

    match delimiter.and_then(|d| rest.split_once(d)) {
        Some((name, value)) => Token::Name {
            name: name.to_string(),
            inline: Some(value.to_string()),
        },
        None => Token::Name {
            name: rest.to_string(),
            inline: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_marks_name_tokens() {
        let options = ParseOptions::default();
        let tokens = scan(&options, ["/Name", "Bob", "/Verbose"]);
        assert_eq!(
            tokens,
            vec![
                Token::Name {
                    name: "Name".to_string(),
                    inline: None
                },
                Token::Value("Bob".to_string()),
                Token::Name {
                    name: "Verbose".to_string(),
                    inline: None
                },
            ]
        );
    }

    #[test]
    fn test_explicit_delimiter_splits_inline_values() {
        let options = ParseOptions {
            assignment_delimiter: Some("=".to_string()),
            ..ParseOptions::default()
        };
        let tokens = scan(&options, ["/Name=Bob", "/Flag"]);
        assert_eq!(
            tokens,
            vec![
                Token::Name {
                    name: "Name".to_string(),
                    inline: Some("Bob".to_string())
                },
                Token::Name {
                    name: "Flag".to_string(),
                    inline: None
                },
            ]
        );
    }

    #[test]
    fn test_whitespace_delimiter_behaves_as_none() {
        let options = ParseOptions {
            assignment_delimiter: Some(" ".to_string()),
            ..ParseOptions::default()
        };
        let tokens = scan(&options, ["/Name Bob"]);
        // The token is never split; the shell already did the splitting.
        assert_eq!(
            tokens,
            vec![Token::Name {
                name: "Name Bob".to_string(),
                inline: None
            }]
        );
    }

    #[test]
    fn test_delimiter_splits_on_first_occurrence_only() {
        let options = ParseOptions {
            assignment_delimiter: Some("=".to_string()),
            ..ParseOptions::default()
        };
        let tokens = scan(&options, ["/Expr=a=b"]);
        assert_eq!(
            tokens,
            vec![Token::Name {
                name: "Expr".to_string(),
                inline: Some("a=b".to_string())
            }]
        );
    }

    #[test]
    fn test_custom_prefix() {
        let options = ParseOptions {
            argument_prefix: "--".to_string(),
            ..ParseOptions::default()
        };
        let tokens = scan(&options, ["--name", "/etc/passwd"]);
        assert_eq!(
            tokens,
            vec![
                Token::Name {
                    name: "name".to_string(),
                    inline: None
                },
                Token::Value("/etc/passwd".to_string()),
            ]
        );
    }
}
