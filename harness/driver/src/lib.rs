pub mod argparser;
mod commands;
mod driver;
mod error;
mod oracle;
mod subject;

pub use self::driver::{generate_cases, run, CaseKind, RunConfig, Summary};
pub use self::error::{ChannelError, OracleError};
pub use self::oracle::{Oracle, OracleConfig, ResponseFormat, Verdict};
pub use self::subject::{resolve_program, Subject};

use std::ffi::OsString;

use clap::Parser;

/// Parses `args` and runs the selected command, returning the process exit status
///
/// Usage errors are returned as `clap::Error` so the caller can let clap report them.
pub fn run_oracle<I, T>(args: I) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = argparser::Interface::try_parse_from(args)?;
    commands::handle_command(cli.command)
}
