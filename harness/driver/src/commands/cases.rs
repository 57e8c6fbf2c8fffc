use std::io::{self, Write};

use log::info;

use rpn_generator::TestCase;

use crate::argparser::GeneratorArgs;
use crate::generate_cases;

/// The main entry point for the 'cases' command
///
/// Prints one `<expression>\t<expected>` line per generated case.
pub fn handle_command(args: &GeneratorArgs) -> anyhow::Result<i32> {
    let seed = args.seed();
    let config = args.generator_config();
    info!("using seed {}", seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_cases(
        seed,
        args.cases,
        args.skip_boundary,
        &config,
        |_, expr| -> anyhow::Result<()> {
            let case = TestCase::new(expr.clone(), args.division)?;
            writeln!(out, "{}", case)?;
            Ok(())
        },
    )?;
    out.flush()?;
    Ok(0)
}
