mod cases;
mod eval;
mod run;

use crate::argparser::Commands;

/// Runs `command`, returning the process exit status
pub fn handle_command(command: Commands) -> anyhow::Result<i32> {
    match command {
        Commands::Run(ref args) => self::run::handle_command(args),
        Commands::Cases(ref args) => self::cases::handle_command(args),
        Commands::Eval(ref args) => self::eval::handle_command(args),
    }
}
