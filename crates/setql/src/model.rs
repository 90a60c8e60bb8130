use crate::{Dialect, Relation};
use setql_core::stmt;

/// A queryable entity mapped to a database table.
pub trait Model: Sized {
    /// Name of the underlying table.
    const TABLE: &'static str;

    /// An unscoped relation selecting every row of the model's table.
    fn query(dialect: Dialect) -> Relation<Self> {
        Relation::new(dialect)
    }

    /// A relation filtered by the given predicate.
    fn filter(dialect: Dialect, expr: impl Into<stmt::Expr>) -> Relation<Self> {
        Self::query(dialect).filter(expr)
    }
}
