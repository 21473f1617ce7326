use super::*;
use cprop_emitter::{IRProperty, IRPropertyKind};
use tempfile::TempDir;

fn accessor(kind: IRPropertyKind, value: IRNode) -> IRNode {
    IRNode::object(vec![
        IRProperty::computed(IRNode::id("k"), IRNode::number("1")),
        IRProperty::computed_accessor(kind, IRNode::id("g"), value),
    ])
}

#[test]
fn test_validate_accepts_function_accessors() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(accessor(
            IRPropertyKind::Get,
            IRNode::func_expr(None, vec![], vec![]),
        )),
    )];
    assert!(validate_accessors(&program).is_ok());
}

#[test]
fn test_validate_rejects_non_function_accessor() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(accessor(IRPropertyKind::Set, IRNode::number("1"))),
    )];
    let err = validate_accessors(&program).expect_err("invalid accessor");
    assert_eq!(
        err.to_string(),
        "accessor `[g]` must have a function expression value"
    );
}

#[test]
fn test_validate_finds_nested_accessors() {
    let bad = IRNode::object(vec![IRProperty::getter("x", IRNode::NullLiteral)]);
    let program = vec![IRNode::func_decl(
        "f",
        vec![],
        vec![IRNode::ret(Some(IRNode::call(IRNode::id("wrap"), vec![bad])))],
    )];
    let err = validate_accessors(&program).expect_err("invalid accessor");
    assert!(err.to_string().contains("`x`"), "{err}");
}

#[test]
fn test_compile_respects_helper_option() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![IRProperty::computed(
            IRNode::id("k"),
            IRNode::number("1"),
        )])),
    )];

    let with_helpers = compile(program.clone(), ResolvedOptions::default());
    assert!(with_helpers.starts_with("function _defineProperty("));

    let without = compile(
        program,
        ResolvedOptions {
            emit_helpers: false,
            ..ResolvedOptions::default()
        },
    );
    assert_eq!(without, "var o = _defineProperty({}, k, 1);\n");
}

#[test]
fn test_read_program_reports_bad_json() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("input.json");
    std::fs::write(&path, r#"[{"NotANode": 1}]"#).expect("write input");
    let err = read_program(&path).expect_err("bad IR");
    assert!(format!("{err:#}").contains("failed to parse input as IR"), "{err:#}");
}
