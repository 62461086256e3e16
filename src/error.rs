//! Shared error utilities used across the compilation pipeline.
//!
//! Tokens carry no source positions, so diagnostics are plain messages
//! rather than caret-annotated source excerpts. Parsing is the only stage
//! that can fail: tokenization accepts any input, and translation degrades
//! unrecognized shapes to a textual fallback instead of erroring.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

/// Failures raised while parsing a source program.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CompileError {
  /// A token was required but the stream was exhausted, either at the start
  /// of a new form or while scanning for a closing parenthesis.
  #[snafu(display("unexpected end of input"))]
  UnexpectedEndOfInput,

  /// A `)` appeared where a new form was expected.
  #[snafu(display("unexpected ')'"))]
  UnmatchedCloseParen,

  /// Parenthesis nesting went past the parser's recursion bound.
  #[snafu(display("expression nesting exceeds {limit} levels"))]
  NestingTooDeep { limit: usize },
}
