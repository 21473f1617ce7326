//! Accessor batching through a mutator map.
//!
//! Getters and setters cannot be expressed with `defineProperty`'s data
//! descriptor, so each one is recorded on a shared map object:
//!
//! ```javascript
//! _mutatorMap[key] = _mutatorMap[key] || {};
//! _mutatorMap[key].get = function () { ... };
//! ```
//!
//! and the whole map is merged into the object once, after the last property
//! (see `ComputedPropertiesTransformer`). A getter and a setter for the same
//! key land on the same map entry; a later write to the same field overwrites
//! the earlier one.

use super::context::LoweringContext;
use crate::transforms::ir::{IRNode, IRProperty, IRPropertyKey, IRPropertyKind};
use crate::transforms::scope::hint_for_node;

/// Record one accessor property on the mutator map.
pub(super) fn push_mutator_define(ctx: &mut LoweringContext<'_>, prop: &IRProperty) {
    let field = match prop.kind {
        IRPropertyKind::Get => "get",
        IRPropertyKind::Set => "set",
        IRPropertyKind::Init => {
            if cfg!(debug_assertions) {
                unreachable!("mutator map only records accessors");
            }
            tracing::warn!("init property routed to the mutator map, skipped");
            return;
        }
    };
    debug_assert!(
        matches!(prop.value, IRNode::FunctionExpr { .. }),
        "accessor value must be a function expression"
    );

    let map = ctx.ensure_mutator_map();

    let mut key = match &prop.key {
        IRPropertyKey::Identifier(name) | IRPropertyKey::StringLiteral(name) => {
            IRNode::string(name.clone())
        }
        IRPropertyKey::NumericLiteral(n) => IRNode::number(n.clone()),
        IRPropertyKey::Computed(expr) => (**expr).clone(),
    };

    // The idiom below names the key three times; evaluate it once.
    if !is_static_key(&key) {
        let memo = ctx.hoisted_temp(&hint_for_node(&key));
        tracing::trace!(temp = %memo, "memoising accessor key");
        ctx.body
            .push(IRNode::expr_stmt(IRNode::assign(IRNode::id(memo.clone()), key)));
        key = IRNode::id(memo);
    }

    let entry = IRNode::elem(map.clone(), key.clone());
    ctx.body.push(IRNode::expr_stmt(IRNode::assign(
        entry.clone(),
        IRNode::logical_or(entry, IRNode::empty_object()),
    )));
    ctx.body.push(IRNode::expr_stmt(IRNode::assign(
        IRNode::prop(IRNode::elem(map, key), field),
        prop.value.clone(),
    )));
}

/// Keys that can be repeated without re-evaluating anything observable.
fn is_static_key(key: &IRNode) -> bool {
    key.is_literal() || matches!(key, IRNode::Identifier(_) | IRNode::This)
}
