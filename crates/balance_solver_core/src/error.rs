use thiserror::Error;

/// Tier ranges that cannot produce a valid puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{field}: empty range [{lo}, {hi}]")]
    Empty {
        field: &'static str,
        lo: i64,
        hi: i64,
    },

    /// Values beyond this bound risk overflowing the derived constants.
    #[error("{field}: values must stay within ±{limit}")]
    TooWide { field: &'static str, limit: i64 },

    #[error("{field}: range must not contain 0")]
    ContainsZero { field: &'static str },

    #[error("{field}: minimum must be at least {min}")]
    BelowMinimum { field: &'static str, min: i64 },

    /// Hard tier needs two distinct nonzero coefficients.
    #[error("{field}: need at least two nonzero values")]
    TooFewNonZero { field: &'static str },
}
