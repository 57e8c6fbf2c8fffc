//! Postfix (reverse Polish) integer expressions and their reference semantics.
//!
//! An expression is a whitespace-separated sequence of signed decimal literals and the twelve
//! binary operators in [`BinaryOp`]. [`eval_expr`] evaluates an [`Expr`] over arbitrary-precision
//! integers and reports division by zero as a distinct, expected failure.
mod evaluator;
mod expr;
mod ops;
mod token;

pub use self::evaluator::{eval_expr, evaluate, EvalError};
pub use self::expr::Expr;
pub use self::ops::BinaryOp;
pub use self::token::{Token, TokenKind};

pub use rpn_number::{DivisionMode, Int};
