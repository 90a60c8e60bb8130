use super::Source;

/// A named table used as a statement's source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    pub name: String,
}

impl SourceTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<SourceTable> for Source {
    fn from(value: SourceTable) -> Self {
        Self::Table(value)
    }
}
