use std::fmt;

#[derive(Copy, Clone, PartialEq)]
pub enum SetOp {
    Union,
    UnionAll,
}

impl SetOp {
    /// The operation name as it appears in the builder API and in error
    /// messages.
    pub fn name(self) -> &'static str {
        match self {
            SetOp::Union => "union",
            SetOp::UnionAll => "union_all",
        }
    }

    pub fn is_union(self) -> bool {
        matches!(self, Self::Union)
    }

    pub fn is_union_all(self) -> bool {
        matches!(self, Self::UnionAll)
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOp::Union => "UNION".fmt(f),
            SetOp::UnionAll => "UNION ALL".fmt(f),
        }
    }
}

impl fmt::Debug for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
