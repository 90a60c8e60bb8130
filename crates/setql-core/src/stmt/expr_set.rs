use std::fmt;

use super::{ExprSetOp, Select};

#[derive(Clone, PartialEq)]
pub enum ExprSet {
    /// A select query, possibly with a filter.
    Select(Box<Select>),

    /// A set operation (union, union all) on two sub-queries
    SetOp(ExprSetOp),
}

impl ExprSet {
    pub fn as_set_op(&self) -> Option<&ExprSetOp> {
        match self {
            Self::SetOp(expr) => Some(expr),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_set_op_unwrap(&self) -> &ExprSetOp {
        self.as_set_op()
            .unwrap_or_else(|| panic!("expected `SetOp`; actual={self:#?}"))
    }

    pub fn is_set_op(&self) -> bool {
        matches!(self, Self::SetOp(_))
    }
}

impl fmt::Debug for ExprSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(e) => e.fmt(f),
            Self::SetOp(e) => e.fmt(f),
        }
    }
}

impl From<ExprSetOp> for ExprSet {
    fn from(value: ExprSetOp) -> Self {
        Self::SetOp(value)
    }
}
