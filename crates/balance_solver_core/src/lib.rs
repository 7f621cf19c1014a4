//! Generation and transformation kernels for balance-scale equations.
//!
//! - [`generate`] draws a solvable puzzle for a difficulty tier.
//! - [`apply`] applies one operation to both pans, or explains why not.
//! - [`is_solved`] reports whether `x` stands alone against its value.

pub mod error;
pub mod generator;
pub mod narration;
pub mod random_source;
pub mod solved;
pub mod tier_ranges;
pub mod transform;

pub use error::RangeError;
pub use generator::{generate, Generator, MAX_RESAMPLES};
pub use random_source::UniformSource;
pub use solved::{is_solved, solved_side};
pub use tier_ranges::{EasyRanges, HardRanges, IntRange, MediumRanges, TierRanges};
pub use transform::{apply, Transformed};
