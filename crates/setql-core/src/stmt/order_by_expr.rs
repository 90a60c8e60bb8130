use super::{Direction, Expr, OrderBy};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression
    pub expr: Expr,

    /// Ascending or descending
    pub order: Option<Direction>,
}

impl OrderByExpr {
    pub fn new(expr: impl Into<Expr>, order: impl Into<Option<Direction>>) -> Self {
        Self {
            expr: expr.into(),
            order: order.into(),
        }
    }
}

impl OrderBy {
    /// Orders by a single column, ascending by default.
    pub fn column(name: impl Into<String>) -> Self {
        OrderByExpr::new(Expr::column(name), None).into()
    }
}
