use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rpn_generator::{boundary_cases, ConfigError, GeneratorConfig, RandomCases};
use rpn_syntax::Expr;

use crate::{Oracle, OracleConfig, OracleError, Subject};

/// Where a generated case came from
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CaseKind {
    Boundary,
    Random,
}
impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Boundary => f.write_str("boundary"),
            Self::Random => f.write_str("random"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The subject executable, resolved on `PATH` when it is a bare name
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub timeout: Duration,
    pub seed: u64,
    /// Number of random expressions checked after the boundary cases
    pub cases: usize,
    pub skip_boundary: bool,
    pub generator: GeneratorConfig,
    pub oracle: OracleConfig,
}
impl RunConfig {
    pub fn new(program: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            program: program.into(),
            args: vec![],
            timeout: Duration::from_millis(10_000),
            seed,
            cases: 1000,
            skip_boundary: false,
            generator: GeneratorConfig::default(),
            oracle: OracleConfig::default(),
        }
    }
}

/// Statistics of a successful run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub seed: u64,
    pub boundary: usize,
    pub random: usize,
    /// Checks on which both sides agreed the expression divides by zero
    pub division_by_zero: usize,
}
impl Summary {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            boundary: 0,
            random: 0,
            division_by_zero: 0,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.boundary + self.random
    }
}
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} boundary and {} random cases passed ({} division by zero), seed {}",
            self.boundary, self.random, self.division_by_zero, self.seed
        )
    }
}

/// Feeds every case for `config` to `f`, boundary cases first, stopping at the first error
///
/// The boundary pool is always drawn, even when boundary cases are skipped, so that a seed
/// yields the same random expressions either way.
pub fn generate_cases<F, E>(
    seed: u64,
    cases: usize,
    skip_boundary: bool,
    config: &GeneratorConfig,
    mut f: F,
) -> Result<(), E>
where
    F: FnMut(CaseKind, &Expr) -> Result<(), E>,
    E: From<ConfigError>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let boundary = boundary_cases(&mut rng, config)?;
    if skip_boundary {
        debug!("skipping {} boundary cases", boundary.len());
    } else {
        info!("generated {} boundary cases", boundary.len());
        for expr in boundary.iter() {
            f(CaseKind::Boundary, expr)?;
        }
    }

    info!("generating {} random cases", cases);
    for expr in RandomCases::new(&mut rng, config)?.take(cases) {
        f(CaseKind::Random, &expr)?;
    }
    Ok(())
}

/// Spawns the subject and checks every generated case against it, failing fast
pub fn run(config: &RunConfig) -> Result<Summary, OracleError> {
    config.generator.validate()?;
    info!("using seed {}", config.seed);

    let subject = Subject::spawn(&config.program, config.args.as_slice(), config.timeout)?;
    let mut oracle = Oracle::new(subject, config.oracle.clone());
    let mut summary = Summary::new(config.seed);

    generate_cases(
        config.seed,
        config.cases,
        config.skip_boundary,
        &config.generator,
        |kind, expr| {
            let verdict = oracle.check(expr)?;
            match kind {
                CaseKind::Boundary => summary.boundary += 1,
                CaseKind::Random => summary.random += 1,
            }
            if verdict.is_division_by_zero() {
                summary.division_by_zero += 1;
            }
            Ok::<(), OracleError>(())
        },
    )?;

    info!("{}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collect(seed: u64, cases: usize, skip_boundary: bool) -> Vec<(CaseKind, String)> {
        let mut out = vec![];
        generate_cases::<_, ConfigError>(
            seed,
            cases,
            skip_boundary,
            &GeneratorConfig::default(),
            |kind, expr| {
                out.push((kind, expr.to_string()));
                Ok(())
            },
        )
        .unwrap();
        out
    }

    #[test]
    fn generated_cases_are_reproducible() {
        assert_eq!(collect(11, 25, false), collect(11, 25, false));
        assert_ne!(collect(11, 25, false), collect(12, 25, false));
    }

    #[test]
    fn generated_cases_put_boundary_first() {
        let cases = collect(3, 10, false);
        let first_random = cases
            .iter()
            .position(|(kind, _)| *kind == CaseKind::Random)
            .unwrap();
        assert!(first_random > 0);
        assert!(cases[first_random..]
            .iter()
            .all(|(kind, _)| *kind == CaseKind::Random));
        assert_eq!(cases.len() - first_random, 10);
    }

    #[test]
    fn skipping_boundary_keeps_the_random_sequence() {
        let random = |cases: Vec<(CaseKind, String)>| {
            cases
                .into_iter()
                .filter(|(kind, _)| *kind == CaseKind::Random)
                .map(|(_, expr)| expr)
                .collect::<Vec<_>>()
        };
        let skipped = collect(5, 20, true);
        assert_eq!(skipped.len(), 20);
        assert_eq!(random(skipped), random(collect(5, 20, false)));
    }

    #[test]
    fn generation_stops_at_the_first_error() {
        let mut seen = 0;
        let result = generate_cases(
            1,
            100,
            true,
            &GeneratorConfig::default(),
            |_, _| {
                seen += 1;
                if seen == 3 {
                    Err(ConfigError::InvalidProbability(2.0))
                } else {
                    Ok(())
                }
            },
        );
        assert!(result.is_err());
        assert_eq!(seen, 3);
    }

    #[test]
    fn run_rejects_invalid_configuration_before_spawning() {
        let mut config = RunConfig::new("/nonexistent/subject", 0);
        config.generator.max_digits = 0;
        match run(&config) {
            Err(OracleError::Config(_)) => (),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }
}
