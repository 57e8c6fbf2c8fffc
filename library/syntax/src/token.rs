use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use rpn_number::Int;

use crate::BinaryOp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Integer(Int),
    Op(BinaryOp),
}

/// A single whitespace-delimited token of a postfix expression
///
/// The source spelling is preserved, so `-0` and `0` are distinct tokens even though they denote
/// the same value, and `%%` renders as written. Equality, ordering and hashing are defined on the
/// spelling alone.
#[derive(Debug, Clone)]
pub struct Token {
    text: Box<str>,
    kind: TokenKind,
}
impl Token {
    /// Classifies `text` as an operator or a decimal integer literal
    pub fn parse(text: &str) -> Option<Self> {
        let kind = match text.parse::<BinaryOp>() {
            Ok(op) => TokenKind::Op(op),
            Err(_) => TokenKind::Integer(Int::parse_decimal(text)?),
        };
        Some(Self {
            text: text.into(),
            kind,
        })
    }

    /// Constructs a literal token from text known to be a decimal integer
    ///
    /// # Panics
    ///
    /// Panics if `text` is not an optionally signed string of ASCII digits.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        match Int::parse_decimal(&text) {
            Some(value) => Self {
                text: text.into_boxed_str(),
                kind: TokenKind::Integer(value),
            },
            None => panic!("invalid integer literal `{}`", text),
        }
    }

    /// Constructs a literal token using the canonical rendering of `value`
    pub fn integer(value: Int) -> Self {
        Self {
            text: value.to_string().into_boxed_str(),
            kind: TokenKind::Integer(value),
        }
    }

    /// Constructs an operator token using its canonical spelling
    pub fn op(op: BinaryOp) -> Self {
        Self {
            text: op.as_str().into(),
            kind: TokenKind::Op(op),
        }
    }

    /// Returns the arithmetic negation of an integer literal by toggling its leading `-`
    ///
    /// Operators have no negation and yield `None`.
    pub fn negated(&self) -> Option<Self> {
        let value = match &self.kind {
            TokenKind::Integer(value) => -value.clone(),
            TokenKind::Op(_) => return None,
        };
        let text = match self.text.strip_prefix('-') {
            Some(rest) => rest.into(),
            None => format!("-{}", self.text.trim_start_matches('+')).into_boxed_str(),
        };
        Some(Self {
            text,
            kind: TokenKind::Integer(value),
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn as_integer(&self) -> Option<&Int> {
        match &self.kind {
            TokenKind::Integer(value) => Some(value),
            TokenKind::Op(_) => None,
        }
    }

    pub fn as_op(&self) -> Option<BinaryOp> {
        match self.kind {
            TokenKind::Op(op) => Some(op),
            TokenKind::Integer(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Eq for Token {}
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text.eq(&other.text)
    }
}
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}
impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn token_classification() {
        let token = Token::parse("pow").unwrap();
        assert_eq!(token.as_op(), Some(BinaryOp::Pow));

        let token = Token::parse("%%").unwrap();
        assert_eq!(token.as_op(), Some(BinaryOp::Rem));
        assert_eq!(token.as_str(), "%%");

        let token = Token::parse("-12").unwrap();
        assert_eq!(token.as_integer(), Some(&Int::new(-12)));

        // A lone minus is the subtraction operator, not a sign
        let token = Token::parse("-").unwrap();
        assert_eq!(token.as_op(), Some(BinaryOp::Sub));

        assert!(Token::parse("12a").is_none());
        assert!(Token::parse("").is_none());
    }

    #[test]
    fn token_negation_preserves_spelling() {
        let zero = Token::literal("0");
        let negated = zero.negated().unwrap();
        assert_eq!(negated.as_str(), "-0");
        assert_eq!(negated.as_integer(), Some(&Int::new(0)));
        assert_ne!(zero, negated);

        let nines = Token::literal("99999");
        assert_eq!(nines.negated().unwrap().as_str(), "-99999");
        assert_eq!(nines.negated().unwrap().negated().unwrap(), nines);

        assert!(Token::op(BinaryOp::Add).negated().is_none());
    }

    #[test]
    #[should_panic(expected = "invalid integer literal")]
    fn token_literal_rejects_operators() {
        Token::literal("pow");
    }
}
