use super::*;

#[test]
fn test_helper_references_are_stable() {
    let mut helpers = FileHelpers::new();
    let first = helpers.helper(HelperName::DefineProperty);
    let second = helpers.helper(HelperName::DefineProperty);
    assert_eq!(first, second);
    assert_eq!(first, IRNode::id("_defineProperty"));
}

#[test]
fn test_requested_helpers_are_recorded() {
    let mut helpers = FileHelpers::new();
    assert!(helpers.needed().is_empty());

    helpers.helper(HelperName::DefineEnumerableProperties);
    assert!(helpers.needed().contains(HelperName::DefineEnumerableProperties));
    assert!(!helpers.needed().contains(HelperName::DefineProperty));

    helpers.helper(HelperName::DefineProperty);
    let order: Vec<_> = helpers.needed().iter().collect();
    assert_eq!(
        order,
        vec![HelperName::DefineProperty, HelperName::DefineEnumerableProperties]
    );
}

#[test]
fn test_definitions_only_include_requested_helpers() {
    let mut helpers = FileHelpers::new();
    assert!(helpers.definitions().is_empty());

    helpers.helper(HelperName::DefineProperty);
    let defs = helpers.definitions();
    assert_eq!(defs.len(), 1);
    match &defs[0] {
        IRNode::Raw(text) => assert!(text.starts_with("function _defineProperty(obj, key, value)")),
        other => panic!("expected raw helper definition, got {other:?}"),
    }
}

#[test]
fn test_helper_definition_binds_given_identifier() {
    for name in HelperName::ALL {
        let text = name.definition(name.identifier());
        assert!(
            text.starts_with(&format!("function {}(", name.identifier())),
            "{} definition should declare {}",
            text,
            name.identifier()
        );
    }
    assert!(
        HelperName::DefineProperty
            .definition("_dp")
            .starts_with("function _dp(obj, key, value) {")
    );
}

#[test]
fn test_bind_unique_reserves_default_identifiers() {
    let mut names = UidGenerator::new();
    let helpers = FileHelpers::bind_unique(&mut names);

    assert_eq!(helpers.binding(HelperName::DefineProperty), "_defineProperty");
    assert!(names.is_reserved("_defineProperty"));
    assert!(names.is_reserved("_defineEnumerableProperties"));
    // A temporary hinted with a helper's name cannot take the helper binding.
    assert_eq!(names.fresh("defineProperty"), "_defineProperty2");
}

#[test]
fn test_bind_unique_renames_helper_taken_by_program() {
    let mut names = UidGenerator::new();
    names.reserve("_defineProperty");
    let mut helpers = FileHelpers::bind_unique(&mut names);

    assert_eq!(helpers.binding(HelperName::DefineProperty), "_defineProperty2");
    assert_eq!(
        helpers.binding(HelperName::DefineEnumerableProperties),
        "_defineEnumerableProperties"
    );
    assert_eq!(
        helpers.helper(HelperName::DefineProperty),
        IRNode::id("_defineProperty2")
    );
    assert_eq!(
        helpers.helper(HelperName::DefineProperty),
        IRNode::id("_defineProperty2")
    );
    match helpers.definitions().as_slice() {
        [IRNode::Raw(text)] => {
            assert!(text.starts_with("function _defineProperty2(obj, key, value) {"))
        }
        other => panic!("expected one helper definition, got {other:?}"),
    }
}
