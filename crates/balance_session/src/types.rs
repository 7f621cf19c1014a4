use balance_ast::{Difficulty, RejectionReason, Side, Term};
use serde::Serialize;
use thiserror::Error;

/// Tone of the message shown above the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The latch is set until a new puzzle starts.
    #[error("puzzle already solved, start a new one")]
    AlreadySolved,

    #[error("{0}")]
    Rejected(#[from] RejectionReason),
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// `None` for typed-in puzzles.
    pub difficulty: Option<Difficulty>,
    pub equation: String,
    pub left: Term,
    pub right: Term,
    pub solution: i64,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_side: Option<Side>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}
