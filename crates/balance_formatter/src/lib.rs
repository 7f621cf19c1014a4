//! Display helpers for balance-scale equations.
//!
//! Nothing here changes equation state; hosts use these to show the pans.

pub mod display;
pub mod pan;

pub use display::{format_term, DisplayEquation, DisplayTerm};
pub use pan::{pan_groups, BlockKind, PanGroup, PanView};
