//! script subcommand handler.
//!
//! Replays a list of learner steps against one puzzle and reports the
//! final state. Refused steps are collected, not fatal.

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Args;

use balance_ast::Puzzle;
use balance_formatter::DisplayEquation;
use balance_parser::{parse_command, parse_equation};
use balance_session::PuzzleSession;

use super::{print_pretty_json, rejection_kind, resolve_difficulty, seeded_rng};
use crate::config::BalanceConfig;
use crate::json_types::{
    ErrorJsonOutput, PansJson, RejectionJson, ScriptJsonOutput, SCHEMA_VERSION,
};

/// Arguments for script subcommand
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Start from this equation instead of a generated one, e.g. "3x + 2 = x + 14"
    #[arg(long, conflicts_with_all = ["difficulty", "seed"])]
    pub equation: Option<String>,

    /// Difficulty tier for a generated puzzle
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Seed for a generated puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step to apply, e.g. "sub 5" or "÷ 3"; repeat for more steps
    #[arg(long = "step")]
    pub steps: Vec<String>,
}

/// Run the script command
pub fn run(args: ScriptArgs, config: &BalanceConfig) -> ExitCode {
    match run_inner(&args, config) {
        Ok(output) => {
            print_pretty_json(&output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = match &args.equation {
                Some(eq) => ErrorJsonOutput::with_input(e.to_string(), eq.clone()),
                None => ErrorJsonOutput::new(e.to_string()),
            };
            print_pretty_json(&err);
            ExitCode::FAILURE
        }
    }
}

fn start_session(args: &ScriptArgs, config: &BalanceConfig) -> Result<PuzzleSession> {
    if let Some(eq) = &args.equation {
        let (left, right) = parse_equation(eq).map_err(|e| anyhow!("invalid equation: {}", e))?;
        let puzzle =
            Puzzle::from_sides(left, right).map_err(|e| anyhow!("invalid equation: {}", e))?;
        return Ok(PuzzleSession::from_puzzle(puzzle));
    }

    let difficulty = resolve_difficulty(args.difficulty.as_deref(), config.difficulty)?;
    let mut rng = seeded_rng(args.seed.or(config.seed));
    Ok(PuzzleSession::with_generator(
        config.generator(),
        difficulty,
        &mut rng,
    ))
}

fn run_inner(args: &ScriptArgs, config: &BalanceConfig) -> Result<ScriptJsonOutput> {
    let mut session = start_session(args, config)?;
    let start_equation = DisplayEquation::from(session.puzzle()).to_string();
    let mut rejections = Vec::new();

    for (index, command) in args.steps.iter().enumerate() {
        let (op, value) = match parse_command(command) {
            Ok(parsed) => parsed,
            Err(e) => {
                rejections.push(RejectionJson {
                    index,
                    command: command.clone(),
                    kind: "parse",
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if let Err(e) = session.apply(op, value) {
            rejections.push(RejectionJson {
                index,
                command: command.clone(),
                kind: rejection_kind(&e),
                reason: e.to_string(),
            });
        }
    }

    let puzzle = *session.puzzle();
    Ok(ScriptJsonOutput {
        schema_version: SCHEMA_VERSION,
        ok: true,
        start_equation,
        session: session.snapshot(),
        pans: PansJson::new(&puzzle.left, &puzzle.right),
        rejections,
    })
}
