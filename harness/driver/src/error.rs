use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use rpn_generator::{ConfigError, Expected};
use rpn_syntax::EvalError;

/// Failures of the line channel to the subject process
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("unable to find subject `{program}`: {source}")]
    Resolve {
        program: String,
        source: which::Error,
    },

    #[error("failed to spawn subject `{program}`: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("failed to write to subject: {0}")]
    Write(#[source] io::Error),

    #[error("failed to read from subject: {0}")]
    Read(#[source] io::Error),

    #[error("subject closed its output ({})", describe_status(.status))]
    Closed { status: Option<ExitStatus> },

    #[error("subject did not respond within {after:?}")]
    Timeout { after: Duration },
}

fn describe_status(status: &Option<ExitStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "still running".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("subject disagrees on `{expression}`: expected {expected}, got {actual:?}")]
    Mismatch {
        expression: String,
        expected: Expected,
        actual: String,
    },

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("reference evaluation of `{expression}` failed: {source}")]
    Harness {
        expression: String,
        source: EvalError,
    },

    #[error("invalid generator configuration: {0}")]
    Config(#[from] ConfigError),
}
impl OracleError {
    /// Returns true if the subject answered, but with the wrong result
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Channel(ChannelError::Timeout { .. }))
    }
}
