//! Test case generators for the postfix oracle.
//!
//! Two complementary sources of expressions are provided: [`boundary_cases`] enumerates every
//! operator applied to a small pool of edge-case operands, and [`random_expr`] builds arbitrary
//! arithmetic expressions of bounded depth. All randomness is drawn from a caller-supplied
//! [`rand::Rng`], so a seeded generator reproduces the same cases.
mod boundary;
mod case;
mod config;
pub mod numbers;
mod random;

pub use self::boundary::{boundary_case_bound, boundary_cases, enumerate_boundary_cases, OperandPool};
pub use self::case::{Expected, TestCase};
pub use self::config::{ConfigError, GeneratorConfig};
pub use self::random::{random_expr, RandomCases};
