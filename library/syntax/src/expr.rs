use core::fmt;
use core::str::FromStr;

use itertools::Itertools;

use crate::{BinaryOp, EvalError, Token, TokenKind};

/// A postfix expression: an ordered sequence of integer literals and operators
///
/// Expressions built through `leaf` and `binary` are well-formed by construction. Expressions
/// parsed from text are only tokenized; their shape is checked when they are evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Expr(Vec<Token>);
impl Expr {
    /// An expression consisting of a single integer literal
    ///
    /// # Panics
    ///
    /// Panics if `token` is an operator.
    pub fn leaf(token: Token) -> Self {
        assert!(
            token.as_integer().is_some(),
            "expected an integer literal, got operator `{}`",
            token
        );
        Self(vec![token])
    }

    /// Joins two subexpressions as `lhs rhs op`
    ///
    /// # Panics
    ///
    /// Panics if `op` is not an operator token.
    pub fn binary(lhs: Expr, rhs: Expr, op: Token) -> Self {
        assert!(
            op.as_op().is_some(),
            "expected an operator, got literal `{}`",
            op
        );
        let mut tokens = lhs.0;
        tokens.reserve(rhs.0.len() + 1);
        tokens.extend(rhs.0);
        tokens.push(op);
        Self(tokens)
    }

    /// Splits `source` on whitespace and classifies every token
    pub fn parse(source: &str) -> Result<Self, EvalError> {
        source
            .split_whitespace()
            .enumerate()
            .map(|(position, text)| {
                Token::parse(text).ok_or_else(|| EvalError::InvalidToken {
                    token: text.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        self.0.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn operators(&self) -> impl Iterator<Item = BinaryOp> + '_ {
        self.0.iter().filter_map(Token::as_op)
    }

    /// Returns true if evaluating this expression leaves exactly one value on the stack without
    /// ever underflowing it
    pub fn is_well_formed(&self) -> bool {
        let mut depth = 0usize;
        for token in self.0.iter() {
            match token.kind() {
                TokenKind::Integer(_) => depth += 1,
                TokenKind::Op(_) if depth < BinaryOp::ARITY => return false,
                TokenKind::Op(_) => depth -= BinaryOp::ARITY - 1,
            }
        }
        depth == 1
    }

    /// The maximum number of values held on the stack while evaluating this expression
    pub fn max_stack_depth(&self) -> usize {
        let mut depth = 0usize;
        let mut max = 0;
        for token in self.0.iter() {
            match token.kind() {
                TokenKind::Integer(_) => {
                    depth += 1;
                    max = max.max(depth);
                }
                TokenKind::Op(_) => depth = depth.saturating_sub(BinaryOp::ARITY - 1),
            }
        }
        max
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for Expr {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expr_construction_renders_postfix() {
        let lhs = Expr::binary(
            Expr::leaf(Token::literal("3")),
            Expr::leaf(Token::literal("4")),
            Token::op(BinaryOp::Add),
        );
        let expr = Expr::binary(
            lhs,
            Expr::leaf(Token::literal("-0")),
            Token::op(BinaryOp::Multiply),
        );
        assert_eq!(expr.to_string(), "3 4 + -0 *");
        assert_eq!(expr.len(), 5);
        assert!(expr.is_well_formed());
        assert_eq!(expr.max_stack_depth(), 2);
        assert_eq!(
            expr.operators().collect::<Vec<_>>(),
            vec![BinaryOp::Add, BinaryOp::Multiply]
        );
    }

    #[test]
    fn expr_parse_normalizes_whitespace() {
        let expr: Expr = "  12\t0   /\n".parse().unwrap();
        assert_eq!(expr.to_string(), "12 0 /");
        assert!(expr.is_well_formed());
    }

    #[test]
    fn expr_parse_reports_invalid_tokens() {
        assert_eq!(
            Expr::parse("1 2 ^"),
            Err(EvalError::InvalidToken {
                token: "^".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn expr_well_formedness() {
        for source in ["1", "1 2 +", "1 2 3 + *", "2 10 pow"] {
            assert!(Expr::parse(source).unwrap().is_well_formed(), "{}", source);
        }
        for source in ["", "+", "1 +", "1 2", "1 2 + +", "1 2 3 +"] {
            assert!(!Expr::parse(source).unwrap().is_well_formed(), "{}", source);
        }
    }
}
