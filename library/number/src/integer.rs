use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;

pub use num_traits::{One, Signed, ToPrimitive, Zero};

use num_bigint::{BigInt, ParseBigIntError};
use num_integer::Integer;

use crate::{DivisionError, DivisionMode};

/// This struct unifies the fixed-width and arbitrary precision integral types used by the oracle
///
/// Values that fit in an `i64` are always stored as `Small`; arithmetic that overflows is
/// transparently promoted to `Big`, and results that fit again are demoted back.
#[derive(Debug, Clone, Hash)]
pub enum Int {
    Small(i64),
    Big(BigInt),
}
impl Int {
    pub const MAX_SMALL: i64 = i64::MAX;
    pub const MIN_SMALL: i64 = i64::MIN;

    #[inline]
    pub fn new(i: i64) -> Self {
        Self::Small(i)
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Small(num) => *num < 0,
            Self::Big(num) => num.is_negative(),
        }
    }

    /// Parses a strictly decimal literal: an optional `+` or `-` followed by one or more ASCII
    /// digits. Unlike `FromStr`, digit separators and surrounding whitespace are rejected.
    pub fn parse_decimal(string: &str) -> Option<Self> {
        let digits = string
            .strip_prefix('-')
            .or_else(|| string.strip_prefix('+'))
            .unwrap_or(string);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        string.parse().ok()
    }

    /// Divides `self` by `rhs`, rounding the quotient according to `mode`
    pub fn divide(self, rhs: &Int, mode: DivisionMode) -> Result<Int, DivisionError> {
        match mode {
            DivisionMode::Floor => self.div_floor(rhs),
            DivisionMode::Truncate => self / rhs,
        }
    }

    /// The remainder that pairs with `divide` under the same `mode`
    pub fn remainder(self, rhs: &Int, mode: DivisionMode) -> Result<Int, DivisionError> {
        match mode {
            DivisionMode::Floor => self.mod_floor(rhs),
            DivisionMode::Truncate => self % rhs,
        }
    }

    pub fn div_floor(self, rhs: &Int) -> Result<Int, DivisionError> {
        if rhs.is_zero() {
            return Err(DivisionError);
        }

        match (self, rhs) {
            // i64::MIN / -1 is the only quotient that does not fit back into an i64
            (Self::Small(lhs), Self::Small(rhs)) if !(lhs == i64::MIN && *rhs == -1) => {
                Ok(Self::Small(Integer::div_floor(&lhs, rhs)))
            }
            (lhs, rhs) => Ok(Integer::div_floor(&lhs.into_big(), &rhs.to_big()).into()),
        }
    }

    pub fn mod_floor(self, rhs: &Int) -> Result<Int, DivisionError> {
        if rhs.is_zero() {
            return Err(DivisionError);
        }

        match (self, rhs) {
            (Self::Small(_), Self::Small(-1)) => Ok(Self::Small(0)),
            (Self::Small(lhs), Self::Small(rhs)) => Ok(Self::Small(Integer::mod_floor(&lhs, rhs))),
            (lhs, rhs) => Ok(Integer::mod_floor(&lhs.into_big(), &rhs.to_big()).into()),
        }
    }

    /// Raises `self` to the power `exp`; `x.pow(0)` is one for every `x`, including zero
    pub fn pow(&self, exp: u32) -> Int {
        match self {
            Self::Small(base) => match base.checked_pow(exp) {
                Some(result) => Self::Small(result),
                None => BigInt::from(*base).pow(exp).into(),
            },
            Self::Big(base) => base.pow(exp).into(),
        }
    }

    fn to_big(&self) -> BigInt {
        match self {
            Self::Small(i) => BigInt::from(*i),
            Self::Big(i) => i.clone(),
        }
    }

    fn into_big(self) -> BigInt {
        match self {
            Self::Small(i) => BigInt::from(i),
            Self::Big(i) => i,
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Small(int) => int.fmt(f),
            Self::Big(int) => int.fmt(f),
        }
    }
}

impl FromStr for Int {
    type Err = ParseBigIntError;
    fn from_str(s: &str) -> Result<Self, ParseBigIntError> {
        match s.parse::<i64>() {
            Ok(i) => Ok(Self::new(i)),
            Err(_) => match s.parse::<BigInt>() {
                Ok(int) => Ok(int.into()),
                Err(err) => Err(err),
            },
        }
    }
}

impl Eq for Int {}
impl PartialEq for Int {
    fn eq(&self, rhs: &Int) -> bool {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.eq(rhs),
            (Self::Small(lhs), Self::Big(rhs)) => {
                if let Some(ref i) = rhs.to_i64() {
                    return lhs.eq(i);
                }
                false
            }
            (Self::Big(lhs), Self::Small(rhs)) => {
                if let Some(ref i) = lhs.to_i64() {
                    return i.eq(rhs);
                }
                false
            }
            (Self::Big(lhs), Self::Big(rhs)) => lhs.eq(rhs),
        }
    }
}
impl PartialEq<i64> for Int {
    fn eq(&self, rhs: &i64) -> bool {
        match self {
            Self::Small(lhs) => lhs.eq(rhs),
            Self::Big(lhs) => {
                let rhs = BigInt::from(*rhs);
                lhs.eq(&rhs)
            }
        }
    }
}
impl PartialEq<Int> for i64 {
    fn eq(&self, rhs: &Int) -> bool {
        rhs.eq(self)
    }
}

impl Ord for Int {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.cmp(rhs),
            (Self::Small(lhs), Self::Big(rhs)) => {
                let lhs = BigInt::from(*lhs);
                lhs.cmp(rhs)
            }
            (Self::Big(lhs), Self::Small(rhs)) => {
                let rhs = BigInt::from(*rhs);
                lhs.cmp(&rhs)
            }
            (Self::Big(lhs), Self::Big(rhs)) => lhs.cmp(rhs),
        }
    }
}
impl PartialOrd for Int {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl PartialOrd<i64> for Int {
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        match self {
            Self::Small(lhs) => lhs.partial_cmp(rhs),
            Self::Big(lhs) => {
                let rhs = BigInt::from(*rhs);
                lhs.partial_cmp(&rhs)
            }
        }
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Self::Output {
        self + &rhs
    }
}
impl Add<&Int> for Int {
    type Output = Int;

    fn add(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => match lhs.checked_add(*rhs) {
                Some(result) => Self::Small(result),
                None => (BigInt::from(lhs) + *rhs).into(),
            },
            (lhs, rhs) => (lhs.into_big() + rhs.to_big()).into(),
        }
    }
}
impl Add<i64> for Int {
    type Output = Int;

    fn add(self, rhs: i64) -> Self::Output {
        self + &Int::Small(rhs)
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Self::Output {
        self - &rhs
    }
}
impl Sub<&Int> for Int {
    type Output = Int;

    fn sub(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => match lhs.checked_sub(*rhs) {
                Some(result) => Self::Small(result),
                None => (BigInt::from(lhs) - *rhs).into(),
            },
            (lhs, rhs) => (lhs.into_big() - rhs.to_big()).into(),
        }
    }
}
impl Sub<i64> for Int {
    type Output = Int;

    fn sub(self, rhs: i64) -> Self::Output {
        self - &Int::Small(rhs)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}
impl Mul<&Int> for Int {
    type Output = Int;

    fn mul(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => match lhs.checked_mul(*rhs) {
                Some(result) => Self::Small(result),
                None => (BigInt::from(lhs) * *rhs).into(),
            },
            (lhs, rhs) => (lhs.into_big() * rhs.to_big()).into(),
        }
    }
}
impl Mul<i64> for Int {
    type Output = Int;

    fn mul(self, rhs: i64) -> Self::Output {
        self * &Int::Small(rhs)
    }
}

/// Truncating division, matching the semantics of Rust's primitive integers
impl Div for Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: Self) -> Self::Output {
        self / &rhs
    }
}
impl Div<&Int> for Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: &Self) -> Self::Output {
        if rhs.is_zero() {
            return Err(DivisionError);
        }

        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => match lhs.checked_div(*rhs) {
                Some(result) => Ok(Self::Small(result)),
                None => Ok((BigInt::from(lhs) / *rhs).into()),
            },
            (lhs, rhs) => Ok((lhs.into_big() / rhs.to_big()).into()),
        }
    }
}
impl Div<i64> for Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: i64) -> Self::Output {
        self / &Int::Small(rhs)
    }
}

/// Truncating remainder, the result takes the sign of the dividend
impl Rem for Int {
    type Output = Result<Int, DivisionError>;

    fn rem(self, rhs: Self) -> Self::Output {
        self % &rhs
    }
}
impl Rem<&Int> for Int {
    type Output = Result<Int, DivisionError>;

    fn rem(self, rhs: &Self) -> Self::Output {
        if rhs.is_zero() {
            return Err(DivisionError);
        }

        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => match lhs.checked_rem(*rhs) {
                Some(result) => Ok(Self::Small(result)),
                None => Ok((BigInt::from(lhs) % *rhs).into()),
            },
            (lhs, rhs) => Ok((lhs.into_big() % rhs.to_big()).into()),
        }
    }
}
impl Rem<i64> for Int {
    type Output = Result<Int, DivisionError>;

    fn rem(self, rhs: i64) -> Self::Output {
        self % &Int::Small(rhs)
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        match self {
            Self::Small(i) => match i.checked_neg() {
                Some(i) => Self::Small(i),
                None => (-BigInt::from(i)).into(),
            },
            Self::Big(i) => (-i).into(),
        }
    }
}

impl Zero for Int {
    fn zero() -> Self {
        Self::Small(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Small(num) => *num == 0,
            Self::Big(num) => num.is_zero(),
        }
    }
}
impl One for Int {
    fn one() -> Self {
        Self::Small(1)
    }
}

impl ToPrimitive for Int {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Small(i) => Some(*i),
            Self::Big(i) => i.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Small(i) => i.to_u64(),
            Self::Big(i) => i.to_u64(),
        }
    }
}

impl From<bool> for Int {
    #[inline(always)]
    fn from(b: bool) -> Self {
        Self::Small(b as i64)
    }
}
impl From<i64> for Int {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl From<BigInt> for Int {
    #[inline]
    fn from(i: BigInt) -> Self {
        match i.to_i64() {
            Some(n) => Self::Small(n),
            None => Self::Big(i),
        }
    }
}
