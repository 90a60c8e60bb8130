use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        match (lhs.into(), rhs.into()) {
            (Expr::Or(mut lhs), Expr::Or(rhs)) => {
                lhs.operands.extend(rhs.operands);
                lhs.into()
            }
            (Expr::Or(mut lhs), rhs) => {
                lhs.operands.push(rhs);
                lhs.into()
            }
            (lhs, Expr::Or(mut rhs)) => {
                rhs.operands.insert(0, lhs);
                rhs.into()
            }
            (lhs, rhs) => ExprOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
