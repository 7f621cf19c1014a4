use std::path::PathBuf;

use balance_ast::{Difficulty, Puzzle, Side};
use balance_formatter::{DisplayEquation, PanView};
use balance_parser::{parse_command, parse_equation};
use balance_session::{FeedbackKind, PuzzleSession};
use clap::Args;
use rand::rngs::StdRng;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::commands::seeded_rng;
use crate::completer::BalanceHelper;
use crate::config::BalanceConfig;

/// Arguments for repl subcommand
#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Starting difficulty: easy, medium, hard (default from config)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for a reproducible puzzle sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

const HELP: &str = "\
Commands:
  add N | sub N | mul N | div N   apply to both sides (also + - * / × ÷)
  new                             new puzzle at the current difficulty
  easy | medium | hard            switch difficulty and start a new puzzle
  load <equation>                 play your own equation, e.g. load 3x + 2 = x + 14
  show                            show the scale
  steps                           list the steps taken so far
  config [save]                   show (or save) the configuration
  help                            this text
  quit | exit                     leave";

pub struct Repl {
    session: PuzzleSession,
    rng: StdRng,
    config: BalanceConfig,
    config_path: PathBuf,
}

impl Repl {
    pub fn new(config: BalanceConfig, config_path: PathBuf, args: ReplArgs) -> Self {
        let difficulty = args.difficulty.unwrap_or(config.difficulty);
        let mut rng = seeded_rng(args.seed.or(config.seed));
        let session = PuzzleSession::with_generator(config.generator(), difficulty, &mut rng);
        Self {
            session,
            rng,
            config,
            config_path,
        }
    }

    #[cfg(test)]
    fn with_session(session: PuzzleSession, config: BalanceConfig) -> Self {
        Self {
            session,
            rng: seeded_rng(config.seed),
            config_path: PathBuf::from(crate::config::DEFAULT_CONFIG_PATH),
            config,
        }
    }

    fn build_prompt(&self) -> String {
        match self.session.tier() {
            Some(d) => format!("[{}] > ", d),
            None => "[custom] > ".to_string(),
        }
    }

    /// Equation, pans and any feedback for the current state.
    pub fn render_state(&self) -> String {
        let puzzle = self.session.puzzle();
        let mut out = format!("  {}", DisplayEquation::from(puzzle));
        if self.config.show_pans {
            out.push_str(&format!(
                "\n  left:  {}\n  right: {}",
                PanView::from(&puzzle.left),
                PanView::from(&puzzle.right)
            ));
        }
        if let Some(fb) = self.session.feedback() {
            let tag = match fb.kind {
                FeedbackKind::Success => "✔",
                FeedbackKind::Error => "✘",
                FeedbackKind::Info => "ℹ",
            };
            out.push_str(&format!("\n{} {}", tag, fb.message));
        }
        if let Some(side) = self.session.solved_side() {
            let pan = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            out.push_str(&format!(
                "\nx stands alone on the {} pan. Type 'new' for another puzzle.",
                pan
            ));
        }
        out
    }

    fn render_steps(&self) -> String {
        let steps = self.session.steps();
        if steps.is_empty() {
            return "No steps yet. Start balancing the scale!".to_string();
        }
        steps
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn handle_command(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };

        match head {
            "quit" | "exit" => Reply::Quit,
            "help" => Reply::Text(HELP.to_string()),
            "show" => Reply::Text(self.render_state()),
            "steps" => Reply::Text(self.render_steps()),
            "new" => {
                self.session.new_puzzle(&mut self.rng);
                Reply::Text(self.render_state())
            }
            "config" => Reply::Text(self.handle_config(rest)),
            "load" => Reply::Text(self.handle_load(rest)),
            _ => {
                if let Ok(difficulty) = head.parse::<Difficulty>() {
                    if rest.is_empty() {
                        self.session.change_difficulty(difficulty, &mut self.rng);
                        return Reply::Text(self.render_state());
                    }
                }
                Reply::Text(self.handle_step(line))
            }
        }
    }

    fn handle_step(&mut self, line: &str) -> String {
        let (op, value) = match parse_command(line) {
            Ok(parsed) => parsed,
            Err(e) => return format!("{}\nType 'help' for the list of commands.", e),
        };
        match self.session.apply(op, value) {
            Ok(description) => {
                let description = description.to_string();
                format!("{}\n{}", description, self.render_state())
            }
            Err(e) => {
                debug!(error = %e, "step refused");
                self.render_state()
            }
        }
    }

    fn handle_load(&mut self, equation: &str) -> String {
        let (left, right) = match parse_equation(equation) {
            Ok(sides) => sides,
            Err(e) => return format!("Error: {}", e),
        };
        match Puzzle::from_sides(left, right) {
            Ok(puzzle) => {
                self.session.load_puzzle(puzzle);
                self.render_state()
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    fn handle_config(&mut self, arg: &str) -> String {
        match arg {
            "" => self.config.to_toml(),
            "save" => match self.config.save(&self.config_path) {
                Ok(()) => format!("Configuration saved to {}", self.config_path.display()),
                Err(e) => format!("Error saving configuration: {}", e),
            },
            other => format!("Unknown config option '{}'. Use 'config' or 'config save'.", other),
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Balance Scale Equations");
        println!("Keep both pans level and get x alone. Type 'help' for commands.");
        println!("{}", self.render_state());

        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl =
            rustyline::Editor::<BalanceHelper, rustyline::history::DefaultHistory>::with_config(
                config,
            )?;
        rl.set_helper(Some(BalanceHelper::new()));

        // History file path: ~/.balance_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".balance_history"))
            .unwrap_or_else(|| PathBuf::from(".balance_history"));

        // Load history if file exists (errors are silently ignored)
        let _ = rl.load_history(&history_path);

        loop {
            let prompt = self.build_prompt();
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    match self.handle_command(line) {
                        Reply::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        Reply::Text(text) => println!("{}", text),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history on exit (errors are silently ignored)
        let _ = rl.save_history(&history_path);

        Ok(())
    }
}
