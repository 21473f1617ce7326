//! Property classification and key resolution.

use crate::transforms::ir::{IRNode, IRProperty, IRPropertyKey};

/// An object literal split at its first computed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedProperties<'a> {
    /// Properties strictly before the first computed key. These stay in the
    /// initial object literal.
    pub prefix: &'a [IRProperty],
    /// The first computed property and everything after it, computed or not,
    /// in source order.
    pub tail: &'a [IRProperty],
}

/// Split `properties` at the first computed key.
///
/// Returns `None` when no key is computed; the literal needs no lowering.
pub fn classify(properties: &[IRProperty]) -> Option<ClassifiedProperties<'_>> {
    let first_computed = properties.iter().position(IRProperty::is_computed)?;
    let (prefix, tail) = properties.split_at(first_computed);
    Some(ClassifiedProperties { prefix, tail })
}

/// The key of `prop` as an expression: static names become string literals,
/// literal keys stay literals, computed keys are their expression.
pub fn computed_key(prop: &IRProperty) -> IRNode {
    match &prop.key {
        IRPropertyKey::Identifier(name) | IRPropertyKey::StringLiteral(name) => {
            IRNode::string(name.clone())
        }
        IRPropertyKey::NumericLiteral(n) => IRNode::number(n.clone()),
        IRPropertyKey::Computed(expr) => (**expr).clone(),
    }
}

/// Whether a resolved key is statically the string `"__proto__"`.
///
/// A computed key that only evaluates to `"__proto__"` at runtime is not
/// recognized here and is lowered like any other key.
pub fn is_proto_key(key: &IRNode) -> bool {
    matches!(key, IRNode::StringLiteral(s) if s == "__proto__")
}
