/// The SQL dialect a relation is built against.
///
/// The dialect is an explicit input to the builder so that dialect-dependent
/// statement shapes can be decided, and tested, without a live connection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Dialect {
    /// Whether set-operation branches are parenthesized for this dialect.
    ///
    /// Parenthesized branches are what permit a per-branch ORDER BY inside a
    /// set operation. SQLite rejects the parens outright, so its branches are
    /// emitted bare and callers must `reorder(None)` each branch themselves.
    pub fn parenthesized_set_operands(self) -> bool {
        !matches!(self, Dialect::Sqlite)
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Dialect::Sqlite)
    }
}
