use std::collections::BTreeSet;

use itertools::iproduct;
use log::debug;
use rand::Rng;

use rpn_syntax::{BinaryOp, Expr, Token};

use crate::numbers::{nines, ones_zeros, random_number};
use crate::{ConfigError, GeneratorConfig};

/// The operands combined by the boundary generator
///
/// The pool holds two random numbers, an all-nines number, a power of ten, the literals `1` and
/// `0`, and the negation of each. The exponent is only ever used as the right operand of `pow`,
/// which keeps powers of the pool bounded.
#[derive(Debug, Clone)]
pub struct OperandPool {
    operands: Vec<Token>,
    exponent: Token,
}
impl OperandPool {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Self {
        let seeds = [
            random_number(rng, config.max_digits),
            random_number(rng, config.max_digits),
            nines(rng, config.max_digits),
            ones_zeros(rng, config.max_digits),
            "1".to_string(),
            "0".to_string(),
        ];
        let exponent = Token::literal(random_number(rng, config.max_exponent_digits));

        Self::new(seeds.into_iter().map(Token::literal), exponent)
    }

    /// Builds a pool from unsigned literals, adding the negation of each and dropping duplicates
    pub fn new<I>(literals: I, exponent: Token) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut operands: Vec<Token> = Vec::new();
        for literal in literals {
            let negated = literal.negated();
            for operand in core::iter::once(literal).chain(negated) {
                if !operands.contains(&operand) {
                    operands.push(operand);
                }
            }
        }
        Self { operands, exponent }
    }

    #[inline]
    pub fn operands(&self) -> &[Token] {
        self.operands.as_slice()
    }

    #[inline]
    pub fn exponent(&self) -> &Token {
        &self.exponent
    }
}

/// Draws a fresh operand pool and enumerates every boundary case over all operators
pub fn boundary_cases<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<BTreeSet<Expr>, ConfigError> {
    config.validate()?;

    let operators = BinaryOp::ALL
        .iter()
        .map(|op| config.operator_token(*op))
        .collect::<Result<Vec<_>, _>>()?;
    let pool = OperandPool::generate(rng, config);
    debug!(
        "boundary operand pool: [{}], exponent {}",
        pool.operands()
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        pool.exponent()
    );

    let cases = enumerate_boundary_cases(&pool, &operators);
    debug!(
        "enumerated {} distinct boundary cases (at most {})",
        cases.len(),
        boundary_case_bound(operators.len(), pool.operands().len())
    );
    Ok(cases)
}

/// Applies every operator to every ordered pair of pool operands
///
/// `pow` always takes the pool's exponent as its right operand, so the pairs that differ only in
/// their right operand collapse into one case.
pub fn enumerate_boundary_cases(pool: &OperandPool, operators: &[Token]) -> BTreeSet<Expr> {
    iproduct!(operators, pool.operands(), pool.operands())
        .map(|(op, lhs, rhs)| {
            let rhs = match op.as_op() {
                Some(BinaryOp::Pow) => pool.exponent(),
                _ => rhs,
            };
            Expr::binary(
                Expr::leaf(lhs.clone()),
                Expr::leaf(rhs.clone()),
                op.clone(),
            )
        })
        .collect()
}

/// The number of cases enumerated before deduplication
pub fn boundary_case_bound(operators: usize, operands: usize) -> usize {
    operators * operands * operands
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use rpn_syntax::{eval_expr, DivisionMode, Int};

    use super::*;

    fn all_operators() -> Vec<Token> {
        BinaryOp::ALL.iter().copied().map(Token::op).collect()
    }

    fn fixed_pool() -> OperandPool {
        let literals = ["123", "45", "999", "100", "1", "0"];
        OperandPool::new(literals.into_iter().map(Token::literal), Token::literal("3"))
    }

    #[test]
    fn operand_pool_includes_negations() {
        let pool = fixed_pool();
        let operands = pool
            .operands()
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>();
        assert_eq!(
            operands,
            vec!["123", "-123", "45", "-45", "999", "-999", "100", "-100", "1", "-1", "0", "-0"]
        );
        assert_eq!(pool.exponent().as_str(), "3");
    }

    #[test]
    fn operand_pool_drops_duplicates() {
        let literals = ["1", "1", "0", "1"];
        let pool = OperandPool::new(literals.into_iter().map(Token::literal), Token::literal("2"));
        assert_eq!(pool.operands().len(), 4);
    }

    #[test]
    fn boundary_cases_are_bounded() {
        let pool = fixed_pool();
        let operators = all_operators();
        let cases = enumerate_boundary_cases(&pool, &operators);
        let bound = boundary_case_bound(operators.len(), pool.operands().len());
        assert_eq!(bound, 12 * 12 * 12);
        assert!(cases.len() <= bound);
        // Eleven operators contribute every pair, pow contributes one case per left operand
        assert_eq!(cases.len(), 11 * 12 * 12 + 12);
    }

    #[test]
    fn boundary_cases_use_the_reserved_exponent_for_pow() {
        let pool = fixed_pool();
        let cases = enumerate_boundary_cases(&pool, &all_operators());
        for expr in cases.iter() {
            let tokens = expr.tokens();
            assert_eq!(tokens.len(), 3);
            assert!(expr.is_well_formed());
            if tokens[2].as_op() == Some(BinaryOp::Pow) {
                assert_eq!(tokens[1].as_str(), "3");
            }
        }
        assert!(cases.contains(&Expr::parse("-999 3 pow").unwrap()));
        assert!(cases.contains(&Expr::parse("0 -0 /").unwrap()));
        assert!(!cases.contains(&Expr::parse("2 -0 pow").unwrap()));
    }

    #[test]
    fn boundary_cases_cover_division_by_zero() {
        let pool = fixed_pool();
        let cases = enumerate_boundary_cases(&pool, &all_operators());
        let zero_divisions = cases
            .iter()
            .filter(|expr| {
                eval_expr(expr, DivisionMode::Floor)
                    .err()
                    .map_or(false, |err| err.is_division_by_zero())
            })
            .count();
        // Two zero spellings as divisor, twelve dividends, two operators
        assert_eq!(zero_divisions, 2 * 12 * 2);

        for expr in cases.iter() {
            if let Err(err) = eval_expr(expr, DivisionMode::Floor) {
                assert!(err.is_division_by_zero(), "{}: {}", expr, err);
            }
        }
    }

    #[test]
    fn boundary_cases_are_reproducible() {
        let config = GeneratorConfig::default();
        let first = boundary_cases(&mut StdRng::seed_from_u64(99), &config).unwrap();
        let second = boundary_cases(&mut StdRng::seed_from_u64(99), &config).unwrap();
        assert_eq!(first, second);

        let results = |cases: &BTreeSet<Expr>| {
            cases
                .iter()
                .map(|expr| eval_expr(expr, DivisionMode::Floor).ok())
                .collect::<Vec<Option<Int>>>()
        };
        assert_eq!(results(&first), results(&second));
    }

    #[test]
    fn boundary_cases_honor_modulo_spelling() {
        let config = GeneratorConfig {
            modulo_token: "%%".to_string(),
            ..Default::default()
        };
        let cases = boundary_cases(&mut StdRng::seed_from_u64(5), &config).unwrap();
        let rem_cases = cases
            .iter()
            .filter(|expr| expr.tokens()[2].as_op() == Some(BinaryOp::Rem))
            .collect::<Vec<_>>();
        assert!(!rem_cases.is_empty());
        assert!(rem_cases.iter().all(|expr| expr.to_string().ends_with(" %%")));
    }

    #[test]
    fn boundary_cases_reject_invalid_config() {
        let config = GeneratorConfig {
            max_exponent_digits: 0,
            ..Default::default()
        };
        assert!(boundary_cases(&mut StdRng::seed_from_u64(5), &config).is_err());
    }
}
