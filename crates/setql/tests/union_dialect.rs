use setql::{
    stmt::{Expr, OrderBy, SetOperand},
    Dialect, Model, Relation,
};

struct User;

impl Model for User {
    const TABLE: &'static str = "users";
}

fn by_id(dialect: Dialect, id: i64) -> Relation<User> {
    User::filter(dialect, Expr::eq(Expr::column("id"), id))
}

fn branches(relation: &Relation<User>) -> (&SetOperand, &SetOperand) {
    let set_op = relation
        .untyped()
        .body
        .as_select_unwrap()
        .source
        .as_derived_unwrap()
        .body
        .as_set_op_unwrap();
    (&set_op.lhs, &set_op.rhs)
}

// ---------------------------------------------------------------------------
// Parenthesizing dialects wrap every branch in a grouping
// ---------------------------------------------------------------------------

#[test]
fn postgresql_branches_are_grouped() {
    let combined = by_id(Dialect::Postgresql, 1)
        .union(by_id(Dialect::Postgresql, 2))
        .unwrap();
    let (lhs, rhs) = branches(&combined);
    assert!(lhs.is_grouping());
    assert!(rhs.is_grouping());
}

#[test]
fn mysql_branches_are_grouped() {
    let combined = by_id(Dialect::Mysql, 1)
        .union_all(by_id(Dialect::Mysql, 2))
        .unwrap();
    let (lhs, rhs) = branches(&combined);
    assert!(lhs.is_grouping());
    assert!(rhs.is_grouping());
}

#[test]
fn grouped_branches_keep_their_order_by() {
    let base = by_id(Dialect::Postgresql, 1).order_by(OrderBy::column("name"));
    let combined = base.union(by_id(Dialect::Postgresql, 2)).unwrap();
    let (lhs, _) = branches(&combined);
    assert!(lhs.as_query().is_some_and(|query| query.is_ordered()));
}

// ---------------------------------------------------------------------------
// SQLite branches stay bare
// ---------------------------------------------------------------------------

#[test]
fn sqlite_branches_are_not_grouped() {
    let combined = by_id(Dialect::Sqlite, 1)
        .union(by_id(Dialect::Sqlite, 2))
        .unwrap();
    let (lhs, rhs) = branches(&combined);
    assert!(!lhs.is_grouping());
    assert!(!rhs.is_grouping());
    assert!(lhs.as_query().is_some());
    assert!(rhs.as_query().is_some());
}

#[test]
fn sqlite_callers_strip_order_with_reorder() {
    let base = by_id(Dialect::Sqlite, 1)
        .order_by(OrderBy::column("name"))
        .reorder(None);
    let combined = base.union(by_id(Dialect::Sqlite, 2)).unwrap();
    let (lhs, _) = branches(&combined);
    assert!(lhs.as_query().is_some_and(|query| !query.is_ordered()));
}

// ---------------------------------------------------------------------------
// Dialect capability flag
// ---------------------------------------------------------------------------

#[test]
fn only_sqlite_forbids_parenthesized_branches() {
    assert!(Dialect::Postgresql.parenthesized_set_operands());
    assert!(Dialect::Mysql.parenthesized_set_operands());
    assert!(!Dialect::Sqlite.parenthesized_set_operands());
}

#[test]
fn combined_relation_keeps_the_dialect() {
    let combined = by_id(Dialect::Sqlite, 1)
        .union(by_id(Dialect::Sqlite, 2))
        .unwrap();
    assert_eq!(combined.dialect(), Dialect::Sqlite);
}
