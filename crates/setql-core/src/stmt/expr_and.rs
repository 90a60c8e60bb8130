use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        match (lhs.into(), rhs.into()) {
            (Expr::And(mut lhs), Expr::And(rhs)) => {
                lhs.operands.extend(rhs.operands);
                lhs.into()
            }
            (Expr::And(mut lhs), rhs) => {
                lhs.operands.push(rhs);
                lhs.into()
            }
            (lhs, Expr::And(mut rhs)) => {
                rhs.operands.insert(0, lhs);
                rhs.into()
            }
            (lhs, rhs) => ExprAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
