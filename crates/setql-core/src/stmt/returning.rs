use super::ExprColumn;

/// The projection part of a SQL query.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Returning {
    /// `SELECT *`
    #[default]
    Star,

    /// An explicit column list
    Columns(Vec<ExprColumn>),
}

impl Returning {
    pub fn columns<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Columns(columns.into_iter().map(ExprColumn::new).collect())
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star)
    }
}
