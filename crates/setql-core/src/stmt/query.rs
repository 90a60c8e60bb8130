use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query. Either `SELECT` or a set operation.
    pub body: ExprSet,

    /// ORDER BY
    pub order_by: Option<OrderBy>,
}

impl Query {
    pub fn new(body: impl Into<ExprSet>) -> Self {
        Self {
            body: body.into(),
            order_by: None,
        }
    }

    pub fn filter(source: impl Into<Source>, filter: impl Into<Filter>) -> Self {
        Self::new(Select::new(source, filter))
    }

    /// ANDs an expression into the select body's filter.
    pub fn and(&mut self, expr: impl Into<Expr>) {
        self.body.as_select_mut_unwrap().add_filter(expr.into());
    }

    pub fn is_ordered(&self) -> bool {
        self.order_by.is_some()
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Self::new(value)
    }
}
