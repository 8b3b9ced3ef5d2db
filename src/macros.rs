//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `mk_token!` - Creates a Token instance
//! - `mk_default_handler!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = mk_token!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! mk_token {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a lexer handler for simple fixed-text tokens.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal token text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\(").unwrap(),
///     handler: mk_default_handler!(TokenKind::OpenParen, "("),
/// }
/// ```
#[macro_export]
macro_rules! mk_default_handler {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push(mk_token!($kind, String::from($value)));
            lexer.advance_n($value.len());
        }
    };
}
