pub mod draw;
pub mod list;

use clap::{ArgAction, Parser, Subcommand};
use loto_common::config::Config;

pub const DEFAULT_DRAW_COUNT: i64 = 5;

#[derive(Parser, Debug)]
#[command(name = "loto", version)]
#[command(about = "Proposing lottery ticket candidates for Japan (Takarakuji).")]
#[command(
    long_about = "Proposing lottery ticket candidates for Japan (Takarakuji).\n\
Applicable to \"Loto\" or \"Numbers\".\n\n\
This tool is purely a complete random pick;\n\
it does not analyze or suggest candidates, nor does it guarantee winning."
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Lottery type to draw for. Prompts for one when omitted
    #[arg(value_name = "GAME")]
    pub game: Option<String>,

    /// Number of lottery results to pick
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_DRAW_COUNT,
        allow_negative_numbers = true
    )]
    pub length: i64,

    /// Hide informational output (-qq also hides warnings)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Displays the available lottery types and their rules
    #[command(alias = "ls")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
