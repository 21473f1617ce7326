//! Direct assignment emission: `_obj[key] = value` / `_obj.key = value`.
//!
//! Used for every init property in loose mode and for a statically known
//! `"__proto__"` key in either mode, where only a real assignment updates the
//! object's prototype.

use super::context::LoweringContext;
use crate::transforms::ir::{IRNode, IRProperty, IRPropertyKey};

/// Append `objectRef[key] = value;` (or the dotted form for a static name).
/// Never participates in define-property chains.
pub(super) fn push_assign(ctx: &mut LoweringContext<'_>, prop: &IRProperty) {
    let object = ctx.ensure_object_ref();
    let target = match &prop.key {
        IRPropertyKey::Identifier(name) => IRNode::prop(object, name.clone()),
        IRPropertyKey::StringLiteral(s) => IRNode::elem(object, IRNode::string(s.clone())),
        IRPropertyKey::NumericLiteral(n) => IRNode::elem(object, IRNode::number(n.clone())),
        IRPropertyKey::Computed(expr) => IRNode::elem(object, (**expr).clone()),
    };

    ctx.body
        .push(IRNode::expr_stmt(IRNode::assign(target, prop.value.clone())));
}
