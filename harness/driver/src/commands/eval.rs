use std::io::{self, BufRead, Write};

use anyhow::bail;

use rpn_syntax::{evaluate, DivisionMode, EvalError};

use crate::argparser::EvalArgs;

/// The main entry point for the 'eval' command
///
/// With an expression argument, prints its value. Otherwise answers each line of stdin, which
/// makes the reference evaluator usable as a subject in its own right.
pub fn handle_command(args: &EvalArgs) -> anyhow::Result<i32> {
    if !args.expression.is_empty() {
        let source = args.expression.join(" ");
        match evaluate_line(&source, args.division) {
            Ok(response) => println!("{}", response),
            Err(err) => bail!("unable to evaluate `{}`: {}", source, err),
        }
        return Ok(0);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        match evaluate_line(&line, args.division) {
            Ok(response) => writeln!(out, "{}", response)?,
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        out.flush()?;
    }
    Ok(0)
}

fn evaluate_line(source: &str, mode: DivisionMode) -> Result<String, EvalError> {
    match evaluate(source, mode) {
        Ok(value) => Ok(value.to_string()),
        Err(err) if err.is_division_by_zero() => Ok("division by zero".to_string()),
        Err(err) => Err(err),
    }
}
