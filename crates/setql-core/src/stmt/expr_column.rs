use super::Expr;

/// References a column of the statement's table source.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    pub name: String,
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
