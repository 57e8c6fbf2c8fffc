use rpn_number::{DivisionMode, Int};

use crate::{BinaryOp, Expr, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("expression evaluated to division by zero in `{op}`")]
    DivisionByZero { op: BinaryOp },

    #[error("malformed expression: expected exactly one value on the stack, found {len}")]
    MalformedExpression { len: usize },

    #[error("malformed expression: `{op}` at token {position} requires two operands")]
    StackUnderflow { op: BinaryOp, position: usize },

    #[error("invalid token `{token}` at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("`pow` does not support the negative exponent {exponent}")]
    NegativeExponent { exponent: Int },

    #[error("`pow` exponent {exponent} is too large")]
    ExponentTooLarge { exponent: Int },
}
impl EvalError {
    /// Division by zero is the one failure both sides of the oracle are expected to report
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns true if this error can only be caused by a malformed expression
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedExpression { .. }
                | Self::StackUnderflow { .. }
                | Self::InvalidToken { .. }
        )
    }
}

/// Tokenizes and evaluates `source` as a postfix expression
pub fn evaluate(source: &str, mode: DivisionMode) -> Result<Int, EvalError> {
    let expr = Expr::parse(source)?;
    eval_expr(&expr, mode)
}

/// Evaluates `expr` left to right with a value stack
///
/// Each operator pops its right operand (pushed last), then its left operand, and pushes the
/// result. Exactly one value must remain once every token is consumed.
pub fn eval_expr(expr: &Expr, mode: DivisionMode) -> Result<Int, EvalError> {
    let mut stack: Vec<Int> = Vec::with_capacity(expr.max_stack_depth());

    for (position, token) in expr.tokens().iter().enumerate() {
        match token.kind() {
            TokenKind::Integer(value) => stack.push(value.clone()),
            TokenKind::Op(op) => {
                let op = *op;
                let (lhs, rhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (lhs, rhs),
                    _ => return Err(EvalError::StackUnderflow { op, position }),
                };
                stack.push(op.apply(lhs, &rhs, mode)?);
            }
        }
    }

    let len = stack.len();
    match stack.pop() {
        Some(result) if len == 1 => Ok(result),
        _ => Err(EvalError::MalformedExpression { len }),
    }
}
