use super::{ExprAnd, ExprBinaryOp, ExprColumn, ExprOr, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of boolean expressions
    And(ExprAnd),

    /// A binary operation on two expressions
    BinaryOp(ExprBinaryOp),

    /// References a column
    Column(ExprColumn),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// A bound-parameter placeholder. The value it stands for lives in the
    /// owning query's ordered parameter list.
    Param,

    /// A literal value, not yet lowered to a parameter
    Value(Value),
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn::new(name).into()
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Replaces every literal value in the expression with a placeholder,
    /// appending the values to `params` in depth-first, left-to-right order.
    ///
    /// This order matches the left-to-right textual order of the rendered
    /// statement, which is what makes parameter lists of separate queries
    /// concatenable.
    pub fn lower_params(&mut self, params: &mut Vec<Value>) {
        match self {
            Expr::And(expr) => {
                for operand in &mut expr.operands {
                    operand.lower_params(params);
                }
            }
            Expr::Or(expr) => {
                for operand in &mut expr.operands {
                    operand.lower_params(params);
                }
            }
            Expr::BinaryOp(expr) => {
                expr.lhs.lower_params(params);
                expr.rhs.lower_params(params);
            }
            Expr::Column(_) | Expr::Param => {}
            Expr::Value(_) => {
                let Expr::Value(value) = std::mem::replace(self, Expr::Param) else {
                    unreachable!();
                };
                params.push(value);
            }
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}
