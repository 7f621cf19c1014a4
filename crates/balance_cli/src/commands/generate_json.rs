//! generate subcommand handler.
//!
//! Draws one puzzle and prints it as JSON.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use balance_formatter::DisplayEquation;

use super::{print_pretty_json, resolve_difficulty, seeded_rng};
use crate::config::BalanceConfig;
use crate::json_types::{ErrorJsonOutput, GenerateJsonOutput, PansJson, SCHEMA_VERSION};

/// Arguments for generate subcommand
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Difficulty tier: easy, medium, hard (default from config)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Seed for a reproducible puzzle (default from config, else random)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the generate command
pub fn run(args: GenerateArgs, config: &BalanceConfig) -> ExitCode {
    match run_inner(&args, config) {
        Ok(output) => {
            print_pretty_json(&output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = match &args.difficulty {
                Some(d) => ErrorJsonOutput::with_input(e.to_string(), d.clone()),
                None => ErrorJsonOutput::new(e.to_string()),
            };
            print_pretty_json(&err);
            ExitCode::FAILURE
        }
    }
}

fn run_inner(args: &GenerateArgs, config: &BalanceConfig) -> Result<GenerateJsonOutput> {
    let difficulty = resolve_difficulty(args.difficulty.as_deref(), config.difficulty)?;
    let seed = args.seed.or(config.seed);
    let mut rng = seeded_rng(seed);

    let puzzle = config.generator().generate(difficulty, &mut rng);

    Ok(GenerateJsonOutput {
        schema_version: SCHEMA_VERSION,
        ok: true,
        difficulty,
        seed,
        equation: DisplayEquation::from(&puzzle).to_string(),
        left: puzzle.left,
        right: puzzle.right,
        solution: puzzle.solution,
        pans: PansJson::new(&puzzle.left, &puzzle.right),
    })
}
