use super::{SetOperand, Source};

/// A fully built statement used as a table source, under a name.
///
/// ```text
/// SELECT ... FROM (<body>) AS <alias>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTable {
    /// The wrapped statement.
    pub body: SetOperand,

    /// The name the derived table is referenced by.
    pub alias: String,
}

impl DerivedTable {
    pub fn new(body: impl Into<SetOperand>, alias: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            alias: alias.into(),
        }
    }
}

impl From<DerivedTable> for Source {
    fn from(value: DerivedTable) -> Self {
        Self::Derived(value)
    }
}
