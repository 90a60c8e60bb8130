use crate::{Model, Relation};
use setql_core::{
    stmt::{self, DerivedTable, ExprSetOp, LoadHint, SetOp, SetOperand},
    Error, Result,
};

/// Argument to [`Relation::union`] and [`Relation::union_all`].
///
/// The two call shapes are resolved into this sum type once, at the API
/// boundary: either an explicit list of already-built sub-queries, or a
/// predicate to apply to the base relation's model.
pub enum UnionArg<M> {
    /// Combine with these queries, in order.
    Queries(Vec<Relation<M>>),

    /// Combine with `M::filter(dialect, expr)`.
    Predicate(stmt::Expr),
}

impl<M> From<Relation<M>> for UnionArg<M> {
    fn from(value: Relation<M>) -> Self {
        Self::Queries(vec![value])
    }
}

impl<M> From<Vec<Relation<M>>> for UnionArg<M> {
    fn from(value: Vec<Relation<M>>) -> Self {
        Self::Queries(value)
    }
}

impl<M, const N: usize> From<[Relation<M>; N]> for UnionArg<M> {
    fn from(value: [Relation<M>; N]) -> Self {
        Self::Queries(value.into())
    }
}

impl<M> From<stmt::Expr> for UnionArg<M> {
    fn from(value: stmt::Expr) -> Self {
        Self::Predicate(value)
    }
}

impl<M: Model> Relation<M> {
    /// Combines this relation with others using `UNION`.
    ///
    /// The result is a fresh relation selecting from the combined queries as
    /// a derived table, with every branch's bound values carried over in
    /// branch order. Duplicate rows are eliminated; use
    /// [`union_all`](Self::union_all) to keep them.
    pub fn union(self, arg: impl Into<UnionArg<M>>) -> Result<Self> {
        self.set_operation(SetOp::Union, arg.into())
    }

    /// Combines this relation with others using `UNION ALL`.
    pub fn union_all(self, arg: impl Into<UnionArg<M>>) -> Result<Self> {
        self.set_operation(SetOp::UnionAll, arg.into())
    }

    fn set_operation(self, op: SetOp, arg: UnionArg<M>) -> Result<Self> {
        let (base, others) = normalize(self, arg)?;
        verify_set_operands(op, &base, &others)?;

        let dialect = base.dialect;
        let grouped = dialect.parenthesized_set_operands();

        // Left-fold the sub-queries into a binary tree: ((a OP b) OP c). The
        // fold order and the parameter order must stay in lockstep, otherwise
        // placeholders bind the wrong values at execution time.
        let mut params = base.params;
        let mut tree = branch(base.untyped, grouped);
        for other in others {
            params.extend(other.params);
            tree = ExprSetOp::new(op, tree, branch(other.untyped, grouped)).into();
        }

        let from = DerivedTable::new(tree, M::TABLE);

        let mut result = M::query(dialect);
        result.untyped.body.as_select_mut_unwrap().source = from.into();
        result.params = params;
        Ok(result)
    }
}

fn branch(query: stmt::Query, grouped: bool) -> SetOperand {
    if grouped {
        SetOperand::grouped(query)
    } else {
        query.into()
    }
}

/// Resolves the argument into the ordered operand list `(base, others)`.
fn normalize<M: Model>(
    base: Relation<M>,
    arg: UnionArg<M>,
) -> Result<(Relation<M>, Vec<Relation<M>>)> {
    let others = match arg {
        UnionArg::Queries(others) => {
            if others.is_empty() {
                return Err(Error::invalid_argument(
                    "set operation requires at least one other query",
                ));
            }
            others
        }
        UnionArg::Predicate(expr) => vec![M::filter(base.dialect, expr)],
    };

    // The dialect decides the statement shape, so every operand must agree.
    if let Some(other) = others.iter().find(|other| other.dialect != base.dialect) {
        return Err(Error::invalid_argument(format!(
            "set operation mixes dialects: {:?} and {:?}",
            base.dialect, other.dialect
        )));
    }

    Ok((base, others))
}

/// Rejects operands whose association-loading semantics cannot cross a set
/// boundary. Checked category by category over the full operand list; the
/// first violated category aborts before any statement is built.
fn verify_set_operands<M: Model>(
    op: SetOp,
    base: &Relation<M>,
    others: &[Relation<M>],
) -> Result<()> {
    let any = |f: fn(&Relation<M>) -> bool| f(base) || others.iter().any(f);

    if any(Relation::has_includes) {
        return Err(Error::unsupported_set_operand(op, LoadHint::Includes));
    }

    if any(Relation::has_preload) {
        return Err(Error::unsupported_set_operand(op, LoadHint::Preload));
    }

    if any(Relation::has_eager_load) {
        return Err(Error::unsupported_set_operand(op, LoadHint::EagerLoad));
    }

    Ok(())
}
