use core::fmt;
use core::str::FromStr;

use log::debug;

use rpn_generator::{Expected, TestCase};
use rpn_syntax::{DivisionMode, Expr, Int};

use crate::{OracleError, Subject};

/// How strictly a subject's numeric response is compared against the expected value
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Surrounding whitespace, a leading `+` and leading zeros are tolerated
    #[default]
    Lenient,
    /// The response must be exactly the canonical decimal rendering of the value
    Strict,
}
impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}
impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "invalid response format '{}', expected one of [lenient, strict]",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    /// Rounding applied by the reference evaluator to `/` and `%`
    pub mode: DivisionMode,
    pub format: ResponseFormat,
    /// Text the subject must print when an expression divides by zero
    pub zero_division_marker: String,
}
impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            mode: DivisionMode::default(),
            format: ResponseFormat::default(),
            zero_division_marker: "division by zero".to_string(),
        }
    }
}
impl OracleConfig {
    /// Returns true if `response` is an acceptable answer for `expected`
    pub fn accepts(&self, expected: &Expected, response: &str) -> bool {
        match expected {
            Expected::DivisionByZero => response.contains(self.zero_division_marker.as_str()),
            Expected::Value(value) => match self.format {
                ResponseFormat::Lenient => {
                    Int::parse_decimal(response.trim()).as_ref() == Some(value)
                }
                ResponseFormat::Strict => response == value.to_string(),
            },
        }
    }
}

/// A check the subject passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub expression: Expr,
    pub expected: Expected,
    pub response: String,
}
impl Verdict {
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        self.expected == Expected::DivisionByZero
    }
}

/// Checks expressions against a subject using the reference evaluator
pub struct Oracle {
    subject: Subject,
    config: OracleConfig,
}
impl Oracle {
    pub fn new(subject: Subject, config: OracleConfig) -> Self {
        Self { subject, config }
    }

    #[inline]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    #[inline]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Sends `expr` to the subject and compares its answer with the reference result
    ///
    /// Any reference failure other than division by zero is a defect in the harness and is
    /// reported before the subject sees the expression.
    pub fn check(&mut self, expr: &Expr) -> Result<Verdict, OracleError> {
        let case =
            TestCase::new(expr.clone(), self.config.mode).map_err(|source| OracleError::Harness {
                expression: expr.to_string(),
                source,
            })?;

        let request = case.expr.to_string();
        let response = self.subject.request(&request)?;
        if !self.config.accepts(&case.expected, &response) {
            return Err(OracleError::Mismatch {
                expression: request,
                expected: case.expected,
                actual: response,
            });
        }

        debug!("{} => {}", request, case.expected);
        Ok(Verdict {
            expression: case.expr,
            expected: case.expected,
            response,
        })
    }
}
