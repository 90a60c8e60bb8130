use super::{ExprSetOp, Query};

/// One branch of a set operation.
///
/// Dialects that accept parenthesized branches get `Grouping` wrappers, which
/// is what permits per-branch ORDER BY. SQLite rejects the parens, so its
/// branches stay as plain `Query` nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SetOperand {
    /// A plain sub-query branch
    Query(Box<Query>),

    /// A parenthesized sub-query branch
    Grouping(Box<Query>),

    /// A nested set operation
    SetOp(Box<ExprSetOp>),
}

impl SetOperand {
    pub fn grouped(query: Query) -> Self {
        Self::Grouping(Box::new(query))
    }

    pub fn is_grouping(&self) -> bool {
        matches!(self, Self::Grouping(_))
    }

    /// The branch's sub-query, grouped or not.
    pub fn as_query(&self) -> Option<&Query> {
        match self {
            Self::Query(query) | Self::Grouping(query) => Some(query),
            Self::SetOp(_) => None,
        }
    }

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
}

impl From<Query> for SetOperand {
    fn from(value: Query) -> Self {
        Self::Query(Box::new(value))
    }
}

impl From<ExprSetOp> for SetOperand {
    fn from(value: ExprSetOp) -> Self {
        Self::SetOp(Box::new(value))
    }
}
