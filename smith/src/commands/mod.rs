mod check;
mod generate;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modelsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "smith")]
#[command(version)]
#[command(about = "Generate Django, Peewee and SQLAlchemy models from a TOML schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate backend code from modelsmith.toml
    Generate(GenerateCommand),

    /// Validate modelsmith.toml without generating code
    Check(CheckCommand),

    /// List models defined in modelsmith.toml
    List(ListCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["smith", "list"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);

        let cli = Cli::parse_from(["smith", "check", "-vv"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
