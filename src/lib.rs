//! Crate root: wires together the compilation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token vector.
//! - `parser` classifies atoms and rebuilds nested expression trees.
//! - `codegen` lowers each tree into one target-language statement.
//! - `error` centralises the failure type shared by the other modules.

pub mod error;
pub mod parser;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult};

use parser::TokenStream;
use tracing::debug;

/// Compile a source program into target-language statements, one per line.
///
/// Top-level forms are emitted in source order. Any parse failure aborts the
/// whole call: no statement of a broken program is emitted, not even the
/// well-formed ones before the offending form.
pub fn compile(source: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(source);
  debug!(tokens = tokens.len(), "tokenized source");

  let mut stream = TokenStream::new(tokens);
  let mut lines = Vec::new();
  while !stream.is_empty() {
    let expr = parser::parse_expr(&mut stream)?;
    lines.push(codegen::translate(&expr));
  }
  debug!(statements = lines.len(), "translated program");

  Ok(lines.join("\n"))
}
