//! Define-property chains (spec mode).
//!
//! Each ordinary init property becomes a `_defineProperty(target, key, value)`
//! call. When the previous output element is the initial object literal or
//! another `_defineProperty` call, it is nested as the new call's target
//! instead of being referenced through a temporary:
//!
//! ```javascript
//! _defineProperty(_defineProperty({ a: 1 }, b, 2), "c", 3)
//! ```
//!
//! A literal made only of init properties therefore lowers to one expression
//! with no temporaries.

use super::classify::computed_key;
use super::context::{LoweringContext, OutputSequence};
use crate::transforms::ir::{IRNode, IRProperty};

pub(super) fn push_define_property(ctx: &mut LoweringContext<'_>, prop: &IRProperty) {
    let helper = ctx.define_property_helper();
    let key = computed_key(prop);
    let value = prop.value.clone();

    if can_wrap_previous(&ctx.body, &helper) {
        ctx.body
            .replace_last(|previous| IRNode::call(helper, vec![previous, key, value]));
    } else {
        let object = ctx.ensure_object_ref();
        tracing::trace!("define-property chain broken, starting a new chain head");
        ctx.body.push(IRNode::call(helper, vec![object, key, value]));
    }
}

/// The last element can become the target of the next call when it is the
/// initial object literal or a call to the same helper.
pub(super) fn can_wrap_previous(body: &OutputSequence, helper: &IRNode) -> bool {
    match body.last() {
        Some(IRNode::ObjectLiteral { .. }) => true,
        Some(IRNode::CallExpr { callee, .. }) => callee.as_ref() == helper,
        _ => false,
    }
}
