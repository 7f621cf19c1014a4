//! Block summary of one pan: bags of `x` and unit weights.
//!
//! A pan holding `3x - 2` shows three `x` bags and two negative unit
//! blocks. Large counts are grouped rather than listed one by one.

use balance_ast::Term;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    X,
    Unit,
}

/// A run of identical blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanGroup {
    pub kind: BlockKind,
    pub negative: bool,
    pub count: u64,
}

impl PanGroup {
    pub fn label(&self) -> &'static str {
        match (self.kind, self.negative) {
            (BlockKind::X, false) => "x",
            (BlockKind::X, true) => "-x",
            (BlockKind::Unit, false) => "+1",
            (BlockKind::Unit, true) => "-1",
        }
    }
}

/// All block groups on one pan, `x` bags first.
pub fn pan_groups(term: &Term) -> Vec<PanGroup> {
    let mut groups = Vec::with_capacity(2);
    if term.has_x() {
        groups.push(PanGroup {
            kind: BlockKind::X,
            negative: term.coeff < 0,
            count: term.coeff.unsigned_abs(),
        });
    }
    if term.constant != 0 {
        groups.push(PanGroup {
            kind: BlockKind::Unit,
            negative: term.constant < 0,
            count: term.constant.unsigned_abs(),
        });
    }
    groups
}

/// Printable pan, e.g. `[x ×3] [-1 ×2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanView {
    pub groups: Vec<PanGroup>,
}

impl From<&Term> for PanView {
    fn from(term: &Term) -> Self {
        Self {
            groups: pan_groups(term),
        }
    }
}

impl fmt::Display for PanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return write!(f, "[ ]");
        }
        for (i, g) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[{} ×{}]", g.label(), g.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_x_before_units() {
        let groups = pan_groups(&Term::new(3, -2));
        assert_eq!(
            groups,
            vec![
                PanGroup {
                    kind: BlockKind::X,
                    negative: false,
                    count: 3
                },
                PanGroup {
                    kind: BlockKind::Unit,
                    negative: true,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn renders_labels_and_counts() {
        assert_eq!(PanView::from(&Term::new(3, 2)).to_string(), "[x ×3] [+1 ×2]");
        assert_eq!(PanView::from(&Term::new(-1, 0)).to_string(), "[-x ×1]");
        assert_eq!(PanView::from(&Term::constant(-4)).to_string(), "[-1 ×4]");
    }

    #[test]
    fn empty_pan() {
        assert!(pan_groups(&Term::ZERO).is_empty());
        assert_eq!(PanView::from(&Term::ZERO).to_string(), "[ ]");
    }

    #[test]
    fn min_value_count_does_not_overflow() {
        let g = pan_groups(&Term::constant(i64::MIN));
        assert_eq!(g[0].count, 1u64 << 63);
    }

    #[test]
    fn serializes_kind_lowercase() {
        let v = serde_json::to_value(PanView::from(&Term::new(2, 0))).unwrap();
        assert_eq!(v["groups"][0]["kind"], "x");
        assert_eq!(v["groups"][0]["count"], 2);
    }
}
