use setql::{
    stmt::{Expr, Value},
    Dialect, Model,
};

struct User;

impl Model for User {
    const TABLE: &'static str = "users";
}

const PG: Dialect = Dialect::Postgresql;

fn by_id(id: i64) -> setql::Relation<User> {
    User::filter(PG, Expr::eq(Expr::column("id"), id))
}

// ---------------------------------------------------------------------------
// Two-way combination: params are `a.params ++ b.params`
// ---------------------------------------------------------------------------

#[test]
fn union_concatenates_params_in_branch_order() {
    let combined = by_id(1).union(by_id(2)).unwrap();
    assert_eq!(combined.params(), [Value::I64(1), Value::I64(2)]);
}

#[test]
fn union_all_concatenates_params_in_branch_order() {
    let combined = by_id(1).union_all(by_id(2)).unwrap();
    assert_eq!(combined.params(), [Value::I64(1), Value::I64(2)]);
}

#[test]
fn base_params_come_first_even_when_longer() {
    let base = User::filter(
        PG,
        Expr::and(
            Expr::eq(Expr::column("a"), 1i64),
            Expr::eq(Expr::column("b"), 2i64),
        ),
    );
    let combined = base.union(by_id(3)).unwrap();
    assert_eq!(
        combined.params(),
        [Value::I64(1), Value::I64(2), Value::I64(3)]
    );
}

// ---------------------------------------------------------------------------
// N-way combination
// ---------------------------------------------------------------------------

#[test]
fn three_way_union_concatenates_all_params() {
    let combined = by_id(1).union([by_id(2), by_id(3)]).unwrap();
    assert_eq!(
        combined.params(),
        [Value::I64(1), Value::I64(2), Value::I64(3)]
    );
}

#[test]
fn four_way_union_all_concatenates_all_params() {
    let combined = by_id(1)
        .union_all(vec![by_id(2), by_id(3), by_id(4)])
        .unwrap();
    assert_eq!(
        combined.params(),
        [Value::I64(1), Value::I64(2), Value::I64(3), Value::I64(4)]
    );
}

// ---------------------------------------------------------------------------
// Predicate argument: builds the other branch on the same table
// ---------------------------------------------------------------------------

#[test]
fn predicate_arg_contributes_its_params_last() {
    let combined = by_id(1)
        .union(Expr::eq(Expr::column("name"), "alice"))
        .unwrap();
    assert_eq!(
        combined.params(),
        [Value::I64(1), Value::String("alice".into())]
    );
}

#[test]
fn predicate_arg_branch_matches_model_filter() {
    let combined = by_id(1)
        .union(Expr::eq(Expr::column("name"), "alice"))
        .unwrap();

    let expected = User::filter(PG, Expr::eq(Expr::column("name"), "alice"));

    let derived = combined
        .untyped()
        .body
        .as_select_unwrap()
        .source
        .as_derived_unwrap();
    let set_op = derived.body.as_set_op_unwrap();
    assert_eq!(set_op.rhs.as_query(), Some(expected.untyped()));
}

// ---------------------------------------------------------------------------
// A combined relation stays composable and keeps the order invariant
// ---------------------------------------------------------------------------

#[test]
fn filtering_the_combined_relation_appends_params() {
    let combined = by_id(1).union(by_id(2)).unwrap();
    let narrowed = combined.filter(Expr::eq(Expr::column("age"), 30i64));
    // The outer WHERE renders after the derived table, so its value sits last.
    assert_eq!(
        narrowed.params(),
        [Value::I64(1), Value::I64(2), Value::I64(30)]
    );
}

#[test]
fn combining_a_combined_relation_keeps_param_order() {
    let combined = by_id(1).union(by_id(2)).unwrap();
    let again = combined.union(by_id(3)).unwrap();
    assert_eq!(
        again.params(),
        [Value::I64(1), Value::I64(2), Value::I64(3)]
    );
}

// ---------------------------------------------------------------------------
// Branches without params contribute nothing
// ---------------------------------------------------------------------------

#[test]
fn unfiltered_branches_have_no_params() {
    let combined = User::query(PG).union(User::query(PG)).unwrap();
    assert!(combined.params().is_empty());
}
