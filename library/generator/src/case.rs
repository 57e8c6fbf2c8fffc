use core::fmt;

use rpn_syntax::{eval_expr, DivisionMode, EvalError, Expr, Int};

/// The outcome the reference evaluator predicts for an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Value(Int),
    DivisionByZero,
}
impl Expected {
    pub fn as_value(&self) -> Option<&Int> {
        match self {
            Self::Value(value) => Some(value),
            Self::DivisionByZero => None,
        }
    }
}
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", value),
            Self::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

/// A generated expression paired with its expected outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub expr: Expr,
    pub expected: Expected,
}
impl TestCase {
    /// Evaluates `expr` with the reference evaluator
    ///
    /// Division by zero becomes an expected outcome, any other evaluation error is returned.
    pub fn new(expr: Expr, mode: DivisionMode) -> Result<Self, EvalError> {
        let expected = match eval_expr(&expr, mode) {
            Ok(value) => Expected::Value(value),
            Err(err) if err.is_division_by_zero() => Expected::DivisionByZero,
            Err(err) => return Err(err),
        };
        Ok(Self { expr, expected })
    }
}
impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.expr, self.expected)
    }
}
