mod commands;
mod completer;
mod config;
mod json_types;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::generate_json::GenerateArgs;
use crate::commands::script_json::ScriptArgs;
use crate::config::BalanceConfig;
use crate::repl::{Repl, ReplArgs};

#[derive(Parser, Debug)]
#[command(
    name = "balance_cli",
    version,
    about = "Solve linear equations by keeping a balance scale level"
)]
struct Cli {
    /// Config file (default: balance_config.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Repl(ReplArgs),
    /// Print one generated puzzle as JSON
    Generate(GenerateArgs),
    /// Apply a list of steps to one puzzle and print the result as JSON
    Script(ScriptArgs),
}

// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config_path = BalanceConfig::resolve_path(cli.config.as_deref());
    let config = BalanceConfig::load(&config_path);

    match cli.command.unwrap_or(Command::Repl(ReplArgs::default())) {
        Command::Repl(args) => {
            let mut repl = Repl::new(config, config_path, args);
            match repl.run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Generate(args) => commands::generate_json::run(args, &config),
        Command::Script(args) => commands::script_json::run(args, &config),
    }
}
