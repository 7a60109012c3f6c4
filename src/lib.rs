//! Lexer and recursive-descent parser for a CoffeeScript-like front end.
//!
//! Two public entry points, mirroring the teacher's `tokenizer`/`parser`
//! split: [`scanner::scan`] turns source text into a token vector;
//! [`parser::parse_tokens`] turns that vector into an AST [`ast::Block`].
//! [`parse`] composes the two for the common case.

pub mod ast;
mod char_class;
pub mod emit;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod span;
pub mod token;

pub use error::Error;

/// Scans and parses `source` in one call.
pub fn parse(source: &str) -> Result<ast::Block, Error> {
    let tokens = scanner::scan(source)?;
    let block = parser::parse_tokens(tokens)?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The full set of spec.md §8.2 literal-I/O scenarios live in
    // `emit::tests`, since checking them means checking `emit` output, not
    // just that `parse` succeeds. These cover `parse`/`Error` plumbing
    // itself: a smoke-test success path and the four named error scenarios.

    #[test]
    fn parse_succeeds_on_well_formed_source() {
        assert!(parse("1 + 2 * 3").is_ok());
    }

    #[test]
    fn scan_error_propagates_through_parse() {
        let err = parse("\"unterminated").unwrap_err();
        assert!(matches!(err, Error::Scan(_)));
    }

    #[test]
    fn missing_indent_after_statement_errors() {
        assert!(parse("foo\n  20").is_err());
    }

    #[test]
    fn double_else_errors() {
        assert!(parse("if friday then sue else joy else huh").is_err());
    }

    #[test]
    fn non_lvalue_for_target_errors() {
        assert!(parse("for 2*x,y in arr then x").is_err());
    }

    #[test]
    fn leading_semicolon_errors() {
        assert!(parse("foo = ->\n ;a()").is_err());
    }
}
