use super::{DerivedTable, SourceTable};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Source is a named table
    Table(SourceTable),

    /// Source is a derived table wrapping a built statement
    Derived(DerivedTable),
}

impl Source {
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(SourceTable::new(name))
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }

    pub fn as_derived(&self) -> Option<&DerivedTable> {
        match self {
            Self::Derived(source) => Some(source),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_derived_unwrap(&self) -> &DerivedTable {
        self.as_derived()
            .unwrap_or_else(|| panic!("expected `Derived`; actual={self:#?}"))
    }
}
