mod derived_table;
pub use derived_table::DerivedTable;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_set;
pub use expr_set::ExprSet;

mod expr_set_op;
pub use expr_set_op::ExprSetOp;

mod filter;
pub use filter::Filter;

mod load_hint;
pub use load_hint::LoadHint;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::SetOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod path;
pub use path::Path;

mod query;
pub use query::Query;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod set_operand;
pub use set_operand::SetOperand;

mod source;
pub use source::Source;

mod source_table;
pub use source_table::SourceTable;

mod value;
pub use value::Value;
