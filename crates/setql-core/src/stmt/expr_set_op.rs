use super::{SetOp, SetOperand};

/// A set operation combining two sub-queries.
///
/// Applies a set operator (union, union all) to combine the results of a
/// left-hand and right-hand branch into a single result set. Chains of more
/// than two sub-queries nest on the left:
///
/// ```text
/// ((a UNION b) UNION c) UNION d
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprSetOp {
    /// The set operation to apply.
    pub op: SetOp,

    /// The left-hand branch.
    pub lhs: SetOperand,

    /// The right-hand branch.
    pub rhs: SetOperand,
}

impl ExprSetOp {
    pub fn new(op: SetOp, lhs: impl Into<SetOperand>, rhs: impl Into<SetOperand>) -> Self {
        Self {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn is_union(&self) -> bool {
        self.op.is_union()
    }

    pub fn is_union_all(&self) -> bool {
        self.op.is_union_all()
    }
}
