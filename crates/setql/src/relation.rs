use crate::{Dialect, Model};
use setql_core::stmt;

use std::{fmt, marker::PhantomData};

/// A composable query over a single model.
///
/// A relation owns its statement AST, the ordered list of values bound to the
/// statement's placeholders, and the association-loading hints requested so
/// far. It is a by-value builder: every method consumes the relation and
/// returns the extended one.
pub struct Relation<M> {
    /// The untyped statement being built
    pub(crate) untyped: stmt::Query,

    /// Bound values, one per `Expr::Param` in the statement, in the
    /// statement's left-to-right textual order
    pub(crate) params: Vec<stmt::Value>,

    /// Association paths to load alongside the primary query
    pub(crate) includes: Vec<stmt::Path>,
    pub(crate) preload: Vec<stmt::Path>,
    pub(crate) eager_load: Vec<stmt::Path>,

    /// The SQL dialect in effect
    pub(crate) dialect: Dialect,

    _p: PhantomData<M>,
}

impl<M: Model> Relation<M> {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            untyped: stmt::Query::filter(stmt::Source::table(M::TABLE), stmt::Filter::default()),
            params: vec![],
            includes: vec![],
            preload: vec![],
            eager_load: vec![],
            dialect,
            _p: PhantomData,
        }
    }

    /// ANDs a predicate into the relation's filter.
    ///
    /// Literal values inside the predicate are lowered to placeholders and
    /// appended to the relation's parameter list.
    pub fn filter(mut self, expr: impl Into<stmt::Expr>) -> Self {
        let mut expr = expr.into();
        expr.lower_params(&mut self.params);
        self.untyped.and(expr);
        self
    }

    /// Replaces the projection with an explicit column list.
    pub fn select<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.untyped.body.as_select_mut_unwrap().returning = stmt::Returning::columns(columns);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<stmt::OrderBy>) -> Self {
        self.untyped.order_by = Some(order_by.into());
        self
    }

    /// Replaces any ordering applied so far. `reorder(None)` strips it, which
    /// SQLite callers must do per branch before combining queries.
    pub fn reorder(mut self, order_by: impl Into<Option<stmt::OrderBy>>) -> Self {
        self.untyped.order_by = order_by.into();
        self
    }

    /// Requests association loading with a separate query per association.
    pub fn include(mut self, path: impl Into<stmt::Path>) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Requests association loading with one query per association kind.
    pub fn preload(mut self, path: impl Into<stmt::Path>) -> Self {
        self.preload.push(path.into());
        self
    }

    /// Requests association loading via a joined query.
    pub fn eager_load(mut self, path: impl Into<stmt::Path>) -> Self {
        self.eager_load.push(path.into());
        self
    }

    pub fn has_includes(&self) -> bool {
        !self.includes.is_empty()
    }

    pub fn has_preload(&self) -> bool {
        !self.preload.is_empty()
    }

    pub fn has_eager_load(&self) -> bool {
        !self.eager_load.is_empty()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The statement built so far.
    pub fn untyped(&self) -> &stmt::Query {
        &self.untyped
    }

    /// The ordered bound values for the statement's placeholders.
    pub fn params(&self) -> &[stmt::Value] {
        &self.params
    }
}

impl<M> Clone for Relation<M> {
    fn clone(&self) -> Self {
        Self {
            untyped: self.untyped.clone(),
            params: self.params.clone(),
            includes: self.includes.clone(),
            preload: self.preload.clone(),
            eager_load: self.eager_load.clone(),
            dialect: self.dialect,
            _p: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Relation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("untyped", &self.untyped)
            .field("params", &self.params)
            .field("dialect", &self.dialect)
            .finish()
    }
}
