use super::*;
use crate::transforms::ir::{IRParam, IRProperty};

#[test]
fn test_fresh_names_are_suffixed_on_reuse() {
    let mut uids = UidGenerator::new();
    assert_eq!(uids.fresh("obj"), "_obj");
    assert_eq!(uids.fresh("obj"), "_obj2");
    assert_eq!(uids.fresh("obj"), "_obj3");
    assert_eq!(uids.fresh("mutatorMap"), "_mutatorMap");
}

#[test]
fn test_fresh_skips_reserved_names() {
    let mut uids = UidGenerator::new();
    uids.reserve("_obj");
    uids.reserve("_obj2");
    assert_eq!(uids.fresh("obj"), "_obj3");
    assert!(uids.is_reserved("_obj3"));
}

#[test]
fn test_for_program_reserves_existing_identifiers() {
    let program = vec![
        IRNode::var_decl(
            "_obj",
            Some(IRNode::object(vec![IRProperty::computed(
                IRNode::id("_mutatorMap"),
                IRNode::number("1"),
            )])),
        ),
        IRNode::func_decl("_ref", vec![IRParam::new("_foo")], vec![]),
    ];
    let mut uids = UidGenerator::for_program(&program);
    assert_eq!(uids.fresh("obj"), "_obj2");
    assert_eq!(uids.fresh("mutatorMap"), "_mutatorMap2");
    assert_eq!(uids.fresh("ref"), "_ref2");
    assert_eq!(uids.fresh("foo"), "_foo2");
}

#[test]
fn test_sanitize_hint() {
    assert_eq!(sanitize_hint("obj"), "obj");
    assert_eq!(sanitize_hint("my-obj"), "myObj");
    assert_eq!(sanitize_hint("__x"), "x");
    assert_eq!(sanitize_hint("item42"), "item");
    assert_eq!(sanitize_hint("a$b"), "a$b");
    assert_eq!(sanitize_hint(""), "ref");
    assert_eq!(sanitize_hint("123"), "ref");
}

#[test]
fn test_hint_for_node() {
    assert_eq!(hint_for_node(&IRNode::id("key")), "key");
    assert_eq!(
        hint_for_node(&IRNode::prop(IRNode::id("a"), "b")),
        "a$b"
    );
    assert_eq!(
        hint_for_node(&IRNode::call(IRNode::prop(IRNode::id("keys"), "next"), vec![])),
        "keys$next"
    );
    assert_eq!(hint_for_node(&IRNode::This), "this");
    assert_eq!(
        hint_for_node(&IRNode::binary(IRNode::id("a"), "+", IRNode::id("b"))),
        "ref"
    );
}

#[test]
fn test_uid_from_node_hint() {
    let mut uids = UidGenerator::new();
    let key = IRNode::call(IRNode::id("computeKey"), vec![]);
    assert_eq!(uids.fresh(&hint_for_node(&key)), "_computeKey");
}
