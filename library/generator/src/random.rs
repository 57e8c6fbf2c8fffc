use rand::Rng;

use rpn_syntax::{BinaryOp, Expr, Token};

use crate::numbers::random_number;
use crate::{ConfigError, GeneratorConfig};

/// Generates a random well-formed expression whose nesting depth is at most `config.max_depth`
///
/// The root is always an operator application unless `max_depth` is 0, so every expression
/// contains at least one operator under the default configuration.
pub fn random_expr<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Expr {
    build(rng, config, 0)
}

fn build<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig, depth: usize) -> Expr {
    if depth >= config.max_depth || (depth > 0 && rng.gen_bool(config.stop_probability)) {
        return Expr::leaf(Token::literal(random_number(rng, config.max_digits)));
    }

    let lhs = build(rng, config, depth + 1);
    let rhs = build(rng, config, depth + 1);
    let op = BinaryOp::ARITHMETIC[rng.gen_range(0..BinaryOp::ARITHMETIC.len())];
    Expr::binary(lhs, rhs, Token::op(op))
}

/// An unbounded stream of random expressions drawn from a borrowed random number generator
pub struct RandomCases<'a, R: ?Sized> {
    rng: &'a mut R,
    config: &'a GeneratorConfig,
}
impl<'a, R: Rng + ?Sized> RandomCases<'a, R> {
    pub fn new(rng: &'a mut R, config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rng, config })
    }
}
impl<'a, R: Rng + ?Sized> Iterator for RandomCases<'a, R> {
    type Item = Expr;

    fn next(&mut self) -> Option<Self::Item> {
        Some(random_expr(&mut *self.rng, self.config))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use rpn_syntax::{eval_expr, DivisionMode};

    use super::*;

    fn nesting_depth(expr: &Expr) -> usize {
        // Rebuild the tree shape from the postfix form
        let mut stack: Vec<usize> = Vec::new();
        for token in expr.tokens() {
            if token.as_op().is_some() {
                let rhs = stack.pop().unwrap();
                let lhs = stack.pop().unwrap();
                stack.push(lhs.max(rhs) + 1);
            } else {
                stack.push(0);
            }
        }
        assert_eq!(stack.len(), 1);
        stack[0]
    }

    #[test]
    fn random_expr_is_reproducible() {
        let config = GeneratorConfig::default();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            RandomCases::new(&mut rng, &config)
                .unwrap()
                .take(50)
                .map(|expr| expr.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(2024), draw(2024));
        assert_ne!(draw(2024), draw(2025));
    }

    #[test]
    fn random_expr_is_well_formed_and_bounded() {
        let mut rng = StdRng::seed_from_u64(17);
        for max_depth in [1, 2, 5, 10] {
            let config = GeneratorConfig {
                max_depth,
                ..Default::default()
            };
            for expr in RandomCases::new(&mut rng, &config).unwrap().take(200) {
                assert!(expr.is_well_formed(), "{}", expr);
                assert!(expr.operators().count() >= 1, "{}", expr);
                assert!(nesting_depth(&expr) <= max_depth, "{}", expr);
                assert!(expr
                    .operators()
                    .all(|op| BinaryOp::ARITHMETIC.contains(&op)));
            }
        }
    }

    #[test]
    fn random_expr_evaluates_to_one_value() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for expr in RandomCases::new(&mut rng, &config).unwrap().take(500) {
            match eval_expr(&expr, DivisionMode::Floor) {
                Ok(_) => (),
                Err(err) => assert!(err.is_division_by_zero(), "{}: {}", expr, err),
            }
        }
    }

    #[test]
    fn random_expr_depth_limits() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = GeneratorConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(random_expr(&mut rng, &config).len(), 1);

        // Never stopping early yields a complete tree
        let config = GeneratorConfig {
            max_depth: 3,
            stop_probability: 0.0,
            ..Default::default()
        };
        let expr = random_expr(&mut rng, &config);
        assert_eq!(expr.len(), 15);
        assert_eq!(nesting_depth(&expr), 3);

        // Always stopping yields a single operator over two literals
        let config = GeneratorConfig {
            stop_probability: 1.0,
            ..Default::default()
        };
        assert_eq!(random_expr(&mut rng, &config).len(), 3);
    }

    #[test]
    fn random_cases_reject_invalid_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig {
            stop_probability: -0.5,
            ..Default::default()
        };
        assert!(RandomCases::new(&mut rng, &config).is_err());
    }
}
