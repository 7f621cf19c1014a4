use crate::error::ParseOperationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic applied to both pans at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol used in step descriptions.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Multiply and divide refuse a zero operand.
    pub fn rejects_zero(self) -> bool {
        matches!(self, Operation::Multiply | Operation::Divide)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "sub" | "subtract" | "minus" | "-" => Ok(Operation::Subtract),
            "mul" | "multiply" | "times" | "*" | "×" => Ok(Operation::Multiply),
            "div" | "divide" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(ParseOperationError(s.to_string())),
        }
    }
}
