mod dialect;
pub use dialect::Dialect;

mod model;
pub use model::Model;

mod relation;
pub use relation::Relation;

mod union;
pub use union::UnionArg;

pub use setql_core::{stmt, Error, Result};
