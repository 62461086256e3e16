//! Code generation: lower one expression tree into one target-language
//! statement.
//!
//! Forms are recognized structurally at translation time instead of being a
//! distinct parse result: a borrowed [`Form`] view is built by checking the
//! known shapes in priority order, and everything else falls through to a
//! textual fallback. Translation is a pure tree-to-text mapping and never
//! fails; a malformed form degrades to its surface form rather than aborting
//! the compile.

use phf::phf_map;

use crate::parser::{Atom, Expr};

/// Binary operators recognized by the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

static BINARY_OPS: phf::Map<&'static str, BinaryOp> = phf_map! {
  "+" => BinaryOp::Add,
  "-" => BinaryOp::Sub,
  "*" => BinaryOp::Mul,
  "/" => BinaryOp::Div,
};

impl BinaryOp {
  fn symbol(self) -> &'static str {
    match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
    }
  }
}

/// A borrowed view of an expression, refined into the shape it will be
/// emitted as.
enum Form<'e> {
  /// `(set <symbol> <value>)`
  Assignment { target: &'e str, value: &'e Expr<'e> },
  /// `(<op> <left> <right>)` with exactly two operands.
  BinaryArithmetic {
    op: BinaryOp,
    lhs: &'e Expr<'e>,
    rhs: &'e Expr<'e>,
  },
  /// `(print <arg>...)`, zero or more arguments.
  Print { args: &'e [Expr<'e>] },
  /// A bare atom, or a list matching none of the shapes above.
  Other(&'e Expr<'e>),
}

impl<'e> Form<'e> {
  /// Recognize the shape of an expression. Shapes overlap, so the checks run
  /// in priority order: assignment, then arithmetic, then print.
  fn of(expr: &'e Expr<'e>) -> Self {
    let Expr::List(items) = expr else {
      return Form::Other(expr);
    };

    if let [Expr::Atom(Atom::Symbol("set")), Expr::Atom(Atom::Symbol(target)), value] =
      items.as_slice()
    {
      return Form::Assignment {
        target: *target,
        value,
      };
    }

    if let [Expr::Atom(Atom::Symbol(op)), lhs, rhs] = items.as_slice()
      && let Some(op) = BINARY_OPS.get(*op).copied()
    {
      return Form::BinaryArithmetic { op, lhs, rhs };
    }

    if let [Expr::Atom(Atom::Symbol("print")), args @ ..] = items.as_slice() {
      return Form::Print { args };
    }

    Form::Other(expr)
  }
}

/// Translate one expression tree into one line of target-language text.
///
/// Pure: the same tree always yields the same text, and translating never
/// mutates or consumes the tree.
pub fn translate(node: &Expr) -> String {
  match Form::of(node) {
    // The target name is a binding target, not an expression; it is taken
    // verbatim.
    Form::Assignment { target, value } => {
      format!("{target} = {}", translate(value))
    }
    // Parenthesized so the source grouping survives composition into a
    // larger expression.
    Form::BinaryArithmetic { op, lhs, rhs } => {
      format!("({} {} {})", translate(lhs), op.symbol(), translate(rhs))
    }
    Form::Print { args } => {
      let args: Vec<String> = args.iter().map(translate).collect();
      format!("print({})", args.join(", "))
    }
    Form::Other(expr) => expr.to_string(),
  }
}
