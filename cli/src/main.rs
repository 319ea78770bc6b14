mod commands;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use colored::*;
use commands::{CommandLine, Commands, draw, list};
use loto_common::LotoError;
use loto_common::config::Config;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    if cfg.no_color {
        colored::control::set_override(false);
    }
    terminal::logging::init_logging(&cfg);

    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands.command {
        Some(Commands::List) => list::list(&mut out)?,
        None => draw::draw(commands.game, commands.length, &mut out)?,
    }

    out.flush().map_err(LotoError::from)?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    // A zero draw count ends the run without any output
    if let Some(LotoError::NonPositiveDrawCount) = err.downcast_ref::<LotoError>() {
        return;
    }
    // Written directly so a RUST_LOG filter cannot swallow it
    eprintln!("{} {err:#}", "[-]".red().bold());
}
