//! Statement rules: assignment, control flow predicates, print, return.

mod common;
use common::*;

use ceres::ast::{BinOp, TypeNode};
use ceres::TypeError;

#[test]
fn assignment_accepts_matching_kinds() {
    check_ok(program(vec![main_class(
        vec![decl(TypeNode::Integer, &["x"]), decl(TypeNode::Boolean, &["b"])],
        vec![assign("x", int(1)), assign("b", boolean(true))],
    )]));
}

#[test]
fn assignment_rejects_mismatched_kinds() {
    let err = check_err(program(vec![main_class(
        vec![decl(TypeNode::Boolean, &["b"])],
        vec![assign("b", int(0))],
    )]));
    assert!(matches!(err, TypeError::AssignmentTypeMismatch { .. }));
}

#[test]
fn assignment_to_undefined_target_is_rejected() {
    let err = check_err(program(vec![main_class(vec![], vec![assign("ghost", int(1))])]));
    assert!(matches!(err, TypeError::UndefinedVariable { name, .. } if name == "ghost"));
}

#[test]
fn object_assignment_only_compares_base_kinds() {
    // Unrelated object classes still assign; only the kind is checked.
    check_ok(program(vec![
        class("A", None, vec![], vec![]),
        class("B", None, vec![], vec![]),
        main_class(
            vec![decl(obj("A"), &["a"])],
            vec![assign("a", new_object("B", vec![]))],
        ),
    ]));
}

#[test]
fn member_assignment_writes_through_objects() {
    let err = check_err(program(vec![
        class("Box", None, vec![decl(TypeNode::Integer, &["value"])], vec![]),
        main_class(
            vec![decl(obj("Box"), &["b"])],
            vec![
                assign("b", new_object("Box", vec![])),
                member_assign("b", "value", boolean(true)),
            ],
        ),
    ]));
    assert!(matches!(err, TypeError::AssignmentTypeMismatch { .. }));

    check_ok(program(vec![
        class("Box", None, vec![decl(TypeNode::Integer, &["value"])], vec![]),
        main_class(
            vec![decl(obj("Box"), &["b"])],
            vec![
                assign("b", new_object("Box", vec![])),
                member_assign("b", "value", int(7)),
            ],
        ),
    ]));
}

#[test]
fn member_assignment_through_non_object_is_rejected() {
    let err = check_err(program(vec![main_class(
        vec![decl(TypeNode::Integer, &["n"])],
        vec![member_assign("n", "value", int(1))],
    )]));
    assert!(matches!(err, TypeError::NotAnObject { name, .. } if name == "n"));
}

#[test]
fn member_assignment_to_missing_field_is_rejected() {
    let err = check_err(program(vec![
        class("Box", None, vec![], vec![]),
        main_class(
            vec![decl(obj("Box"), &["b"])],
            vec![
                assign("b", new_object("Box", vec![])),
                member_assign("b", "nope", int(1)),
            ],
        ),
    ]));
    assert!(matches!(err, TypeError::UndefinedMember { name, .. } if name == "nope"));
}

#[test]
fn if_predicate_must_be_boolean() {
    check_ok(program(vec![main_class(
        vec![decl(TypeNode::Integer, &["x"])],
        vec![if_else(
            binop(BinOp::Greater, int(2), int(1)),
            vec![assign("x", int(1))],
            vec![assign("x", int(2))],
        )],
    )]));

    let err = check_err(program(vec![main_class(
        vec![],
        vec![if_else(int(1), vec![], vec![])],
    )]));
    assert!(matches!(err, TypeError::IfPredicateTypeMismatch { .. }));
}

#[test]
fn while_predicate_must_be_boolean() {
    check_ok(program(vec![main_class(
        vec![],
        vec![while_loop(boolean(false), vec![])],
    )]));

    let err = check_err(program(vec![main_class(
        vec![],
        vec![while_loop(int(0), vec![])],
    )]));
    assert!(matches!(err, TypeError::WhilePredicateTypeMismatch { .. }));
}

#[test]
fn do_while_predicate_must_be_boolean() {
    let err = check_err(program(vec![main_class(
        vec![],
        vec![do_while(vec![], int(0))],
    )]));
    assert!(matches!(err, TypeError::DoWhilePredicateTypeMismatch { .. }));
}

#[test]
fn body_errors_surface_before_predicate_errors() {
    // The branch bodies are checked before the predicate rule fires.
    let err = check_err(program(vec![main_class(
        vec![],
        vec![if_else(int(1), vec![assign("ghost", int(1))], vec![])],
    )]));
    assert!(matches!(err, TypeError::UndefinedVariable { .. }));
}

#[test]
fn print_checks_its_expression() {
    check_ok(program(vec![main_class(vec![], vec![print(int(42))])]));

    let err = check_err(program(vec![main_class(vec![], vec![print(var("ghost"))])]));
    assert!(matches!(err, TypeError::UndefinedVariable { .. }));
}

#[test]
fn void_method_must_not_return_a_value() {
    let err = check_err(program(vec![
        class(
            "C",
            None,
            vec![],
            vec![method("f", TypeNode::None, vec![], vec![], vec![], Some(int(1)))],
        ),
        main_class(vec![], vec![]),
    ]));
    assert!(matches!(err, TypeError::ReturnTypeMismatch { .. }));
}

#[test]
fn value_method_must_return() {
    let err = check_err(program(vec![
        class(
            "C",
            None,
            vec![],
            vec![method("f", TypeNode::Integer, vec![], vec![], vec![], None)],
        ),
        main_class(vec![], vec![]),
    ]));
    assert!(matches!(err, TypeError::ReturnTypeMismatch { .. }));
}

#[test]
fn returned_value_must_match_the_declared_kind() {
    let err = check_err(program(vec![
        class(
            "C",
            None,
            vec![],
            vec![method("f", TypeNode::Integer, vec![], vec![], vec![], Some(boolean(true)))],
        ),
        main_class(vec![], vec![]),
    ]));
    assert!(matches!(err, TypeError::ReturnTypeMismatch { .. }));

    check_ok(program(vec![
        class(
            "C",
            None,
            vec![],
            vec![method("f", TypeNode::Integer, vec![], vec![], vec![], Some(int(0)))],
        ),
        main_class(vec![], vec![]),
    ]));
}

#[test]
fn object_returns_compare_base_kinds_only() {
    // Returning a B from a method declared to return A is accepted.
    check_ok(program(vec![
        class("A", None, vec![], vec![]),
        class("B", None, vec![], vec![]),
        class(
            "C",
            None,
            vec![],
            vec![method("make", obj("A"), vec![], vec![], vec![], Some(new_object("B", vec![])))],
        ),
        main_class(vec![], vec![]),
    ]));
}
