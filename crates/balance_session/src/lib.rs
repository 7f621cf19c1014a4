//! Session state for one learner at the scale.
//!
//! Owns the puzzle, the step log and the solved latch so that hosts only
//! forward user actions and render what comes back.

pub mod session;
pub mod types;

pub use session::PuzzleSession;
pub use types::{Feedback, FeedbackKind, SessionError, SessionSnapshot};
