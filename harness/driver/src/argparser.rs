//! Command-line interface of the oracle.
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::info;

use rpn_generator::GeneratorConfig;
use rpn_syntax::DivisionMode;

use crate::{OracleConfig, ResponseFormat, RunConfig};

#[derive(Parser, Debug)]
#[clap(name = "rpn-oracle", version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Interface {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a postfix calculator against the reference evaluator
    Run(RunArgs),
    /// Print the generated cases and their expected outcomes without running a subject
    Cases(GeneratorArgs),
    /// Evaluate expressions with the reference evaluator
    Eval(EvalArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Seed for case generation. If not specified, a random seed is chosen and logged
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// Number of random expressions generated after the boundary cases
    #[clap(long, value_parser, default_value_t = 1000)]
    pub cases: usize,

    /// Maximum nesting depth of random expressions
    #[clap(long, value_parser, default_value_t = 10)]
    pub max_depth: usize,

    /// Maximum number of digits in generated operands
    #[clap(long, value_parser, default_value_t = 6)]
    pub max_digits: usize,

    /// Maximum number of digits in the exponent of `pow` boundary cases
    #[clap(long, value_parser, default_value_t = 1)]
    pub max_exponent_digits: usize,

    /// Probability that a random subexpression stops at a literal
    #[clap(long, value_parser, default_value_t = 0.7)]
    pub stop_probability: f64,

    /// Rounding of `/` and `%` when the quotient is inexact
    #[clap(long, value_parser, default_value_t = DivisionMode::Floor)]
    pub division: DivisionMode,

    /// Spelling of the remainder operator in generated expressions, `%` or `%%`
    #[clap(long, value_parser, default_value = "%")]
    pub modulo_token: String,

    /// Only check random expressions
    #[clap(long, action)]
    pub skip_boundary: bool,
}
impl GeneratorArgs {
    /// The requested seed, or a fresh random one
    pub fn seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                info!("no seed given, using {}", seed);
                seed
            }
        }
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_depth: self.max_depth,
            max_digits: self.max_digits,
            max_exponent_digits: self.max_exponent_digits,
            stop_probability: self.stop_probability,
            modulo_token: self.modulo_token.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[clap(flatten)]
    pub generator: GeneratorArgs,

    /// Text the subject prints when an expression divides by zero
    #[clap(long, value_parser, default_value = "division by zero")]
    pub zero_division_marker: String,

    /// Require responses to be exactly the canonical decimal rendering of the result
    #[clap(long, action)]
    pub strict: bool,

    /// How long to wait for each response, in milliseconds
    #[clap(long, value_parser, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// The calculator under test. Bare names are looked up on PATH
    #[clap(value_parser)]
    pub subject: PathBuf,

    /// Arguments passed to the subject
    #[clap(last(true), value_parser)]
    pub args: Vec<OsString>,
}
impl RunArgs {
    pub fn run_config(&self, seed: u64) -> RunConfig {
        RunConfig {
            program: self.subject.clone(),
            args: self.args.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            seed,
            cases: self.generator.cases,
            skip_boundary: self.generator.skip_boundary,
            generator: self.generator.generator_config(),
            oracle: OracleConfig {
                mode: self.generator.division,
                format: if self.strict {
                    ResponseFormat::Strict
                } else {
                    ResponseFormat::Lenient
                },
                zero_division_marker: self.zero_division_marker.clone(),
            },
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Rounding of `/` and `%` when the quotient is inexact
    #[clap(long, value_parser, default_value_t = DivisionMode::Floor)]
    pub division: DivisionMode,

    /// The expression to evaluate. If omitted, expressions are read from stdin, one per line
    #[clap(value_parser, allow_hyphen_values = true)]
    pub expression: Vec<String>,
}
