use super::*;
use crate::transforms::helpers::HelperName;
use crate::transforms::ir::{IRParam, IRPropertyKind};

fn run(program: Vec<IRNode>, loose: bool) -> LoweredProgram {
    ComputedPropertiesPass::new(ComputedPropertiesOptions { loose }).run(program)
}

fn getter(value: &str) -> IRNode {
    IRNode::func_expr(None, vec![], vec![IRNode::ret(Some(IRNode::number(value)))])
}

#[test]
fn test_pass_leaves_plain_literals_alone() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![IRProperty::init("a", IRNode::number("1"))])),
    )];
    let lowered = run(program.clone(), false);
    assert_eq!(lowered.statements, program);
    assert_eq!(lowered.lowered_literals, 0);
    assert!(lowered.helpers.needed().is_empty());
}

#[test]
fn test_pass_rewrites_initializer_in_place() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![
            IRProperty::computed(IRNode::id("k"), IRNode::number("1")),
            IRProperty::init("x", IRNode::number("2")),
        ])),
    )];
    let lowered = run(program, false);
    assert_eq!(
        lowered.print(false),
        "var o = _defineProperty(_defineProperty({}, k, 1), \"x\", 2);\n"
    );
    assert_eq!(lowered.lowered_literals, 1);
    assert!(lowered.helpers.needed().contains(HelperName::DefineProperty));
}

#[test]
fn test_pass_declares_temporaries_at_program_top() {
    let program = vec![
        IRNode::expr_stmt(IRNode::call(IRNode::id("setup"), vec![])),
        IRNode::var_decl(
            "config",
            Some(IRNode::object(vec![IRProperty::computed(
                IRNode::id("k"),
                IRNode::number("1"),
            )])),
        ),
    ];
    let lowered = run(program, true);
    assert_eq!(
        lowered.print(false),
        "var _config;\nsetup();\nvar config = (_config = {}, _config[k] = 1, _config);\n"
    );
}

#[test]
fn test_pass_avoids_names_used_by_program() {
    let program = vec![
        IRNode::var_decl("_config", Some(IRNode::NullLiteral)),
        IRNode::var_decl(
            "config",
            Some(IRNode::object(vec![IRProperty::computed(
                IRNode::id("k"),
                IRNode::number("1"),
            )])),
        ),
    ];
    let out = run(program, true).print(false);
    assert!(out.starts_with("var _config2;\n"), "{out}");
    assert!(out.contains("(_config2 = {}, _config2[k] = 1, _config2)"));
}

#[test]
fn test_pass_hints_from_assignment_and_property_name() {
    let assigned = vec![IRNode::expr_stmt(IRNode::assign(
        IRNode::id("x"),
        IRNode::object(vec![IRProperty::computed(IRNode::id("k"), IRNode::number("1"))]),
    ))];
    assert_eq!(
        run(assigned, true).print(false),
        "var _x;\nx = (_x = {}, _x[k] = 1, _x);\n"
    );

    let nested = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![IRProperty::init(
            "inner",
            IRNode::object(vec![IRProperty::computed(IRNode::id("k"), IRNode::number("1"))]),
        )])),
    )];
    assert_eq!(
        run(nested, true).print(false),
        "var _inner;\nvar o = { inner: (_inner = {}, _inner[k] = 1, _inner) };\n"
    );
}

#[test]
fn test_pass_lowers_inner_literals_first() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![IRProperty::computed(
            IRNode::id("a"),
            IRNode::object(vec![IRProperty::computed(IRNode::id("b"), IRNode::number("1"))]),
        )])),
    )];
    let lowered = run(program, false);
    assert_eq!(
        lowered.print(false),
        "var o = _defineProperty({}, a, _defineProperty({}, b, 1));\n"
    );
    assert_eq!(lowered.lowered_literals, 2);
}

#[test]
fn test_pass_hoists_into_enclosing_function() {
    let literal = IRNode::object(vec![
        IRProperty::computed(IRNode::id("k"), IRNode::number("1")),
        IRProperty::computed_accessor(
            IRPropertyKind::Get,
            IRNode::call(IRNode::id("g"), vec![]),
            getter("2"),
        ),
    ]);
    let program = vec![IRNode::func_decl("f", vec![], vec![IRNode::ret(Some(literal))])];
    let lowered = run(program, false);

    let expected = "function f() {\n    \
                    var _obj, _mutatorMap, _g;\n    \
                    return (_obj = _defineProperty({}, k, 1), _mutatorMap = {}, _g = g(), \
                    _mutatorMap[_g] = _mutatorMap[_g] || {}, \
                    _mutatorMap[_g].get = function () { return 2; }, \
                    _defineEnumerableProperties(_obj, _mutatorMap), _obj);\n\
                    }\n";
    assert_eq!(lowered.print(false), expected);
    assert!(lowered
        .helpers
        .needed()
        .contains(HelperName::DefineEnumerableProperties));
}

#[test]
fn test_pass_prints_helpers_before_program() {
    let program = vec![IRNode::var_decl(
        "o",
        Some(IRNode::object(vec![IRProperty::computed(
            IRNode::id("k"),
            IRNode::number("1"),
        )])),
    )];
    let lowered = run(program, false);

    let with_helpers = lowered.print(true);
    assert!(with_helpers.starts_with("function _defineProperty(obj, key, value) {"));
    assert!(with_helpers.ends_with("var o = _defineProperty({}, k, 1);\n"));
    assert!(!with_helpers.contains("_defineEnumerableProperties"));

    assert!(!lowered.print(false).contains("function _defineProperty"));
}

#[test]
fn test_pass_stops_at_depth_limit() {
    let mut node = IRNode::object(vec![IRProperty::computed(IRNode::id("k"), IRNode::number("1"))]);
    for _ in 0..(MAX_LOWERING_DEPTH + 10) {
        node = IRNode::ArrayLiteral(vec![node]);
    }
    let program = vec![IRNode::expr_stmt(node)];
    let lowered = run(program.clone(), false);
    assert_eq!(lowered.lowered_literals, 0);
    assert_eq!(lowered.statements, program);
}

#[test]
fn test_temporary_hinted_with_helper_name_gets_own_binding() {
    let program = vec![
        IRNode::var_decl(
            "defineProperty",
            Some(IRNode::object(vec![
                IRProperty::computed(IRNode::id("a"), IRNode::number("1")),
                IRProperty::getter("b", getter("2")),
            ])),
        ),
        IRNode::var_decl(
            "y",
            Some(IRNode::object(vec![IRProperty::computed(
                IRNode::id("c"),
                IRNode::number("3"),
            )])),
        ),
    ];
    let out = run(program, false).print(false);

    assert!(out.starts_with("var _defineProperty2, _mutatorMap;\n"), "{out}");
    assert!(
        out.contains("var defineProperty = (_defineProperty2 = _defineProperty({}, a, 1), "),
        "{out}"
    );
    assert!(
        out.contains("_defineEnumerableProperties(_defineProperty2, _mutatorMap), _defineProperty2);"),
        "{out}"
    );
    assert!(out.ends_with("var y = _defineProperty({}, c, 3);\n"), "{out}");
}

#[test]
fn test_helper_renamed_when_program_binds_its_name() {
    let literal = IRNode::object(vec![IRProperty::computed(
        IRNode::id("k"),
        IRNode::number("1"),
    )]);
    let program = vec![IRNode::func_decl(
        "f",
        vec![IRParam::new("_defineProperty")],
        vec![IRNode::ret(Some(literal))],
    )];
    let lowered = run(program, false);

    assert_eq!(
        lowered.print(false),
        "function f(_defineProperty) { return _defineProperty2({}, k, 1); }\n"
    );
    assert!(lowered
        .print(true)
        .starts_with("function _defineProperty2(obj, key, value) {\n"));
}
