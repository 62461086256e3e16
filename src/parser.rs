//! Recursive-descent parser producing one expression tree per top-level form.
//!
//! The parser owns the source language's data model: atom tokens are
//! classified as they are consumed, and nesting is rebuilt from the flat
//! token vector. Consumption goes through a cursor ([`TokenStream`]) rather
//! than popping tokens from the front, so "remaining input" has a single
//! unambiguous owner and repeated [`parse_expr`] calls can share one stream.

use std::fmt;

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::Token;

/// Nesting bound for the recursive-descent parser. Source nested deeper than
/// this fails with [`CompileError::NestingTooDeep`] instead of overflowing
/// the call stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A classified leaf value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atom<'a> {
  Int(i64),
  Real(f64),
  Symbol(&'a str),
}

impl<'a> Atom<'a> {
  /// Classify a single atom token.
  ///
  /// Integer parsing is attempted before real parsing, so `"10"` stays an
  /// integer. Every string is at least a symbol, so classification is total.
  pub fn classify(text: &'a str) -> Self {
    if let Ok(value) = text.parse::<i64>() {
      return Atom::Int(value);
    }
    if let Ok(value) = text.parse::<f64>() {
      return Atom::Real(value);
    }
    Atom::Symbol(text)
  }
}

impl fmt::Display for Atom<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Atom::Int(value) => write!(f, "{value}"),
      // An integral real keeps its decimal point so the target language
      // still reads a real number.
      Atom::Real(value) if value.fract() == 0.0 && value.is_finite() => {
        write!(f, "{value:.1}")
      }
      Atom::Real(value) => write!(f, "{value}"),
      Atom::Symbol(name) => f.write_str(name),
    }
  }
}

/// An expression tree: a classified leaf or an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
  Atom(Atom<'a>),
  List(Vec<Expr<'a>>),
}

impl fmt::Display for Expr<'_> {
  /// Renders the expression in its source surface form, e.g. `(set x 10)`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Atom(atom) => atom.fmt(f),
      Expr::List(items) => {
        f.write_str("(")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            f.write_str(" ")?;
          }
          item.fmt(f)?;
        }
        f.write_str(")")
      }
    }
  }
}

/// Lightweight cursor over the token vector.
pub struct TokenStream<'a> {
  tokens: Vec<Token<'a>>,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the token vector; the parser advances `pos` as it
  /// consumes input.
  pub fn new(tokens: Vec<Token<'a>>) -> Self {
    Self { tokens, pos: 0 }
  }

  fn peek(&self) -> Option<Token<'a>> {
    self.tokens.get(self.pos).copied()
  }

  fn advance(&mut self) -> Option<Token<'a>> {
    let token = self.peek();
    if token.is_some() {
      self.pos += 1;
    }
    token
  }

  /// True once every token has been consumed.
  pub fn is_empty(&self) -> bool {
    self.pos >= self.tokens.len()
  }
}

/// Parse exactly one expression, leaving the stream positioned on whatever
/// follows it.
pub fn parse_expr<'a>(stream: &mut TokenStream<'a>) -> CompileResult<Expr<'a>> {
  parse_at_depth(stream, 0)
}

fn parse_at_depth<'a>(
  stream: &mut TokenStream<'a>,
  depth: usize,
) -> CompileResult<Expr<'a>> {
  let Some(token) = stream.advance() else {
    return Err(CompileError::UnexpectedEndOfInput);
  };

  match token {
    Token::OpenParen => {
      if depth >= MAX_NESTING_DEPTH {
        return Err(CompileError::NestingTooDeep {
          limit: MAX_NESTING_DEPTH,
        });
      }

      let mut items = Vec::new();
      loop {
        match stream.peek() {
          Some(Token::CloseParen) => {
            stream.advance();
            return Ok(Expr::List(items));
          }
          Some(_) => items.push(parse_at_depth(stream, depth + 1)?),
          // The list is still open, so running out of tokens here is a
          // truncated form, not a clean end of input.
          None => return Err(CompileError::UnexpectedEndOfInput),
        }
      }
    }
    Token::CloseParen => Err(CompileError::UnmatchedCloseParen),
    Token::Atom(text) => Ok(Expr::Atom(Atom::classify(text))),
  }
}
