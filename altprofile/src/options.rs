//! Option strings for input and output formats.
//!
//! Formats that take options receive them as a single blank-separated
//! string, e.g. `--width 800 --height 300`. Bare `key=value` tokens are
//! accepted as shorthand for `--key=value`. Each format describes its
//! options as a [`clap::Parser`].

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use crate::error::{ProfileError, Result};

/// Splits an option string on blanks, keeping quoted runs together.
///
/// # Examples
///
/// ```
/// use altprofile::options::split;
///
/// assert_eq!(split("--width 800  --height 300"), ["--width", "800", "--height", "300"]);
/// assert_eq!(split(r#"--delimiter ";" x='a b'"#), ["--delimiter", ";", "x=a b"]);
/// assert!(split("   ").is_empty());
/// ```
pub fn split(options: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for ch in options.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Rewrites a bare `key=value` token into `--key=value`.
fn normalize(token: String) -> String {
    match token.split_once('=') {
        Some((key, _)) if !token.starts_with('-') && !key.is_empty() => format!("--{token}"),
        _ => token,
    }
}

/// Parses the option string of `format` into `T`.
///
/// A help request (`--help`) is logged and leaves every option at its
/// default.
pub fn parse<T: Parser>(format: &str, options: &str) -> Result<T> {
    let args = std::iter::once(format.to_string()).chain(split(options).into_iter().map(normalize));

    match T::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            info!("{}", err.render());
            T::try_parse_from([format]).map_err(|e| invalid(format, options, e))
        }
        Err(err) => Err(invalid(format, options, err)),
    }
}

fn invalid(format: &str, options: &str, err: clap::Error) -> ProfileError {
    ProfileError::InvalidOptions {
        format: format.to_string(),
        options: options.to_string(),
        message: err.render().to_string().trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct SizeOptions {
        #[arg(long, default_value_t = 10)]
        width: u32,
        #[arg(long, default_value_t = 5)]
        height: u32,
    }

    #[test]
    fn test_split_quotes() {
        assert_eq!(split(r#""a b" c"#), ["a b", "c"]);
        assert_eq!(split(r#"--delimiter '' "#), ["--delimiter", ""]);
        assert_eq!(split("\t--width\n800 "), ["--width", "800"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("width=800".to_string()), "--width=800");
        assert_eq!(normalize("--width=800".to_string()), "--width=800");
        assert_eq!(normalize("800".to_string()), "800");
        assert_eq!(normalize("=800".to_string()), "=800");
    }

    #[test]
    fn test_parse_defaults() {
        let opts: SizeOptions = parse("PNG", "").unwrap();
        assert_eq!((opts.width, opts.height), (10, 5));
    }

    #[test]
    fn test_parse_values() {
        let opts: SizeOptions = parse("PNG", "--width 800 height=300").unwrap();
        assert_eq!((opts.width, opts.height), (800, 300));
    }

    #[test]
    fn test_parse_help_keeps_defaults() {
        let opts: SizeOptions = parse("PNG", "--help").unwrap();
        assert_eq!((opts.width, opts.height), (10, 5));
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse::<SizeOptions>("PNG", "--width wide").unwrap_err();
        match err {
            ProfileError::InvalidOptions {
                format, options, ..
            } => {
                assert_eq!(format, "PNG");
                assert_eq!(options, "--width wide");
            }
            other => panic!("Expected InvalidOptions, got {other:?}"),
        }

        assert!(parse::<SizeOptions>("PNG", "--depth 3").is_err());
    }
}
