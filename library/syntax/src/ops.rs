use core::fmt;
use core::str::FromStr;

use rpn_number::{DivisionMode, Int, ToPrimitive};

use crate::EvalError;

/// The set of all binary operators which may appear in a postfix expression
///
/// Every operator consumes exactly two operands and produces exactly one integer. Comparisons
/// produce `1` for true and `0` for false.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryOp {
    Add,
    Sub,
    Multiply,
    Divide,
    Lt,
    Equal,
    NotEqual,
    Lte,
    Gt,
    Gte,
    Rem,
    Pow,
}
impl BinaryOp {
    pub const ARITY: usize = 2;

    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Sub,
        Self::Multiply,
        Self::Divide,
        Self::Lt,
        Self::Equal,
        Self::NotEqual,
        Self::Lte,
        Self::Gt,
        Self::Gte,
        Self::Rem,
        Self::Pow,
    ];

    /// The operators used when building random expressions
    pub const ARITHMETIC: [Self; 4] = [Self::Add, Self::Sub, Self::Multiply, Self::Divide];

    /// The canonical token for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Lt => "<",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Rem => "%",
            Self::Pow => "pow",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Equal | Self::NotEqual | Self::Lte | Self::Gt | Self::Gte
        )
    }

    /// Returns true for the operators which are undefined when the right operand is zero
    pub fn is_division(&self) -> bool {
        matches!(self, Self::Divide | Self::Rem)
    }

    /// Applies this operator to `lhs` and `rhs`, where `rhs` is the operand pushed last
    pub fn apply(self, lhs: Int, rhs: &Int, mode: DivisionMode) -> Result<Int, EvalError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs
                .divide(rhs, mode)
                .map_err(|_| EvalError::DivisionByZero { op: self })?,
            Self::Rem => lhs
                .remainder(rhs, mode)
                .map_err(|_| EvalError::DivisionByZero { op: self })?,
            Self::Lt => (lhs < *rhs).into(),
            Self::Equal => (lhs == *rhs).into(),
            Self::NotEqual => (lhs != *rhs).into(),
            Self::Lte => (lhs <= *rhs).into(),
            Self::Gt => (lhs > *rhs).into(),
            Self::Gte => (lhs >= *rhs).into(),
            Self::Pow => {
                if rhs.is_negative() {
                    return Err(EvalError::NegativeExponent {
                        exponent: rhs.clone(),
                    });
                }
                let exponent = rhs.to_u32().ok_or_else(|| EvalError::ExponentTooLarge {
                    exponent: rhs.clone(),
                })?;
                lhs.pow(exponent)
            }
        };

        Ok(result)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "<" => Ok(Self::Lt),
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            "<=" => Ok(Self::Lte),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Gte),
            // Some calculators spell the remainder operator `%%`
            "%" | "%%" => Ok(Self::Rem),
            "pow" => Ok(Self::Pow),
            _ => Err(()),
        }
    }
}
