//! Centralised error hierarchy for the **Lox interpreter**.
//!
//! All subsystems (scanner, parser, resolver, runtime) convert their internal
//! failure modes into one of the variants defined here.  Syntax and static
//! errors are collected and reported together; a runtime error is a single
//! in-flight value that halts the current run.
//!
//! The module **does not** print diagnostics itself.

use std::io;
use thiserror::Error;

use log::info;

use crate::token::Token;

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        line: usize,
        /// `""`, `" at end"` or `" at '<lexeme>'"`.
        location: String,
    },

    /// Static‑analysis or resolution failure (e.g. early‑binding errors).
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        message: String,
        line: usize,
        location: String,
    },

    /// Runtime evaluation error, located by the token that triggered it.
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Where a static diagnostic points, relative to `token`.
fn location(token: &Token) -> String {
    if token.is_eof() {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

impl LoxError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        LoxError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse_at<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Parse error: line={}, msg={}", token.line, message);

        LoxError::Parse {
            message,
            line: token.line,
            location: location(token),
        }
    }

    /// Helper constructor for the **resolver**.
    pub fn resolve_at<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Resolve error: line={}, msg={}", token.line, message);

        LoxError::Resolve {
            message,
            line: token.line,
            location: location(token),
        }
    }

    /// Helper constructor for the **interpreter**.
    pub fn runtime<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", token.line, message);

        LoxError::Runtime {
            message,
            line: token.line,
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn parse_error_points_at_lexeme() {
        let token = Token::new(TokenType::IDENTIFIER, "foo", 4);
        let err = LoxError::parse_at(&token, "Expect ';' after value.");
        assert_eq!(err.to_string(), "[line 4] Error at 'foo': Expect ';' after value.");
    }

    #[test]
    fn parse_error_at_eof_says_at_end() {
        let token = Token::new(TokenType::EOF, "", 9);
        let err = LoxError::parse_at(&token, "Expect expression.");
        assert_eq!(err.to_string(), "[line 9] Error at end: Expect expression.");
    }

    #[test]
    fn invalid_utf8_converts() {
        let err: LoxError = String::from_utf8(vec![0x66, 0xff]).unwrap_err().into();
        assert!(matches!(err, LoxError::Utf8(_)));
    }

    #[test]
    fn runtime_error_appends_line_marker() {
        let token = Token::new(TokenType::PLUS, "+", 2);
        let err = LoxError::runtime(&token, "Operands must be two numbers or two strings.");
        assert_eq!(
            err.to_string(),
            "Operands must be two numbers or two strings.\n[line 2]"
        );
    }
}
