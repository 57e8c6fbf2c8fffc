use anyhow::Context;
use log::info;

use crate::argparser::RunArgs;

/// The main entry point for the 'run' command
pub fn handle_command(args: &RunArgs) -> anyhow::Result<i32> {
    let seed = args.generator.seed();
    let config = args.run_config(seed);

    let summary = crate::run(&config).with_context(|| {
        format!(
            "oracle run against {} failed (seed {})",
            config.program.display(),
            seed
        )
    })?;
    info!("{} checks passed", summary.total());
    println!("OK");
    Ok(0)
}
