use crate::types::{Feedback, SessionError, SessionSnapshot};
use balance_ast::{Difficulty, Operation, Puzzle, Side};
use balance_formatter::DisplayEquation;
use balance_solver_core::narration::{rejection_hint, solved_message};
use balance_solver_core::{apply, solved_side, Generator, UniformSource};
use tracing::{debug, info};

/// One learner's puzzle and everything done to it so far.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    generator: Generator,
    /// Tier used for the next generated puzzle.
    difficulty: Difficulty,
    /// Tier of the current puzzle, `None` when it was typed in.
    tier: Option<Difficulty>,
    puzzle: Puzzle,
    steps: Vec<String>,
    solved: Option<Side>,
    feedback: Option<Feedback>,
}

impl PuzzleSession {
    /// Start with a generated puzzle from the default ranges.
    pub fn new<R: UniformSource + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::with_generator(Generator::new(), difficulty, rng)
    }

    pub fn with_generator<R: UniformSource + ?Sized>(
        generator: Generator,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Self {
        let puzzle = generator.generate(difficulty, rng);
        let mut session = Self {
            generator,
            difficulty,
            tier: Some(difficulty),
            puzzle,
            steps: Vec::new(),
            solved: None,
            feedback: None,
        };
        session.refresh_solved();
        session
    }

    /// Start from a given puzzle, e.g. one typed in by hand.
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        let mut session = Self {
            generator: Generator::new(),
            difficulty: Difficulty::default(),
            tier: None,
            puzzle,
            steps: Vec::new(),
            solved: None,
            feedback: None,
        };
        session.refresh_solved();
        session
    }

    /// Fresh puzzle at the current difficulty. Clears log, latch and feedback.
    pub fn new_puzzle<R: UniformSource + ?Sized>(&mut self, rng: &mut R) {
        let puzzle = self.generator.generate(self.difficulty, rng);
        self.reset_to(puzzle, Some(self.difficulty));
    }

    pub fn change_difficulty<R: UniformSource + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) {
        self.difficulty = difficulty;
        self.new_puzzle(rng);
    }

    /// Swap in a typed puzzle, keeping the selected difficulty for later.
    pub fn load_puzzle(&mut self, puzzle: Puzzle) {
        self.reset_to(puzzle, None);
    }

    /// Apply `op value` to both pans.
    ///
    /// On success the step is logged and the description returned; on
    /// failure the puzzle is untouched and the error feedback is set.
    pub fn apply(&mut self, op: Operation, value: i64) -> Result<&str, SessionError> {
        if self.solved.is_some() {
            self.feedback = Some(Feedback::info("Already solved! Start a new puzzle."));
            return Err(SessionError::AlreadySolved);
        }

        let out = match apply(self.puzzle.left, self.puzzle.right, op, value) {
            Ok(out) => out,
            Err(reason) => {
                self.feedback = Some(Feedback::error(rejection_hint(reason)));
                return Err(SessionError::Rejected(reason));
            }
        };

        self.puzzle.left = out.left;
        self.puzzle.right = out.right;
        self.steps.push(out.description);
        self.feedback = None;
        self.refresh_solved();

        if self.solved.is_some() {
            info!(
                solution = self.puzzle.solution,
                steps = self.steps.len(),
                "puzzle solved"
            );
            self.feedback = Some(Feedback::success(solved_message(self.puzzle.solution)));
        }

        Ok(self.steps.last().map(String::as_str).unwrap_or_default())
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn is_solved(&self) -> bool {
        self.solved.is_some()
    }

    /// Pan holding the lone `x` once solved.
    pub fn solved_side(&self) -> Option<Side> {
        self.solved
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tier(&self) -> Option<Difficulty> {
        self.tier
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            difficulty: self.tier,
            equation: DisplayEquation::from(&self.puzzle).to_string(),
            left: self.puzzle.left,
            right: self.puzzle.right,
            solution: self.puzzle.solution,
            solved: self.is_solved(),
            solved_side: self.solved,
            steps: self.steps.clone(),
            feedback: self.feedback.clone(),
        }
    }

    fn reset_to(&mut self, puzzle: Puzzle, tier: Option<Difficulty>) {
        debug!(?tier, equation = %DisplayEquation::from(&puzzle), "new puzzle");
        self.puzzle = puzzle;
        self.tier = tier;
        self.steps.clear();
        self.feedback = None;
        self.refresh_solved();
    }

    fn refresh_solved(&mut self) {
        let p = &self.puzzle;
        self.solved = solved_side(p.left, p.right, p.solution);
    }
}
