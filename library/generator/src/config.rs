use rpn_syntax::{BinaryOp, Token};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{option} must be at least 1")]
    ZeroDigits { option: &'static str },

    #[error("stop probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("'{0}' is not a spelling of the remainder operator, expected '%' or '%%'")]
    InvalidModuloToken(String),
}

/// Tunables shared by the boundary and random generators
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Maximum nesting depth of random expressions
    pub max_depth: usize,
    /// Maximum number of digits in a generated operand
    pub max_digits: usize,
    /// Maximum number of digits in the exponent reserved for `pow`
    pub max_exponent_digits: usize,
    /// Probability that a random expression below the root stops at a literal
    pub stop_probability: f64,
    /// The spelling of the remainder operator sent to the subject
    pub modulo_token: String,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_digits: 6,
            max_exponent_digits: 1,
            stop_probability: 0.7,
            modulo_token: BinaryOp::Rem.as_str().to_string(),
        }
    }
}
impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits == 0 {
            return Err(ConfigError::ZeroDigits {
                option: "max-digits",
            });
        }
        if self.max_exponent_digits == 0 {
            return Err(ConfigError::ZeroDigits {
                option: "max-exponent-digits",
            });
        }
        if !(0.0..=1.0).contains(&self.stop_probability) {
            return Err(ConfigError::InvalidProbability(self.stop_probability));
        }
        self.operator_token(BinaryOp::Rem)?;
        Ok(())
    }

    /// The token emitted for `op`, honoring the configured remainder spelling
    pub fn operator_token(&self, op: BinaryOp) -> Result<Token, ConfigError> {
        if op != BinaryOp::Rem {
            return Ok(Token::op(op));
        }
        match Token::parse(&self.modulo_token) {
            Some(token) if token.as_op() == Some(BinaryOp::Rem) => Ok(token),
            _ => Err(ConfigError::InvalidModuloToken(self.modulo_token.clone())),
        }
    }
}
