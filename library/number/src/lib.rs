mod integer;

pub use self::integer::*;

use core::fmt;
use core::str::FromStr;

/// Returned when the right-hand side of a division or remainder is zero
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivisionError;
impl fmt::Display for DivisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("division by zero")
    }
}
impl std::error::Error for DivisionError {}

/// Selects how an inexact integer quotient is rounded.
///
/// `Floor` rounds the quotient toward negative infinity, so the remainder carries the sign of the
/// divisor. `Truncate` rounds toward zero, so the remainder carries the sign of the dividend. Both
/// agree whenever the division is exact or the operands share a sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DivisionMode {
    #[default]
    Floor,
    Truncate,
}
impl DivisionMode {
    pub const ALL: [Self; 2] = [Self::Floor, Self::Truncate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Truncate => "truncate",
        }
    }
}
impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for DivisionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(Self::Floor),
            "truncate" | "trunc" => Ok(Self::Truncate),
            other => Err(format!(
                "invalid division mode '{}', expected one of [floor, truncate]",
                other
            )),
        }
    }
}
