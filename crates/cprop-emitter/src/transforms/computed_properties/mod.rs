//! Computed Property ES5 Transform
//!
//! Lowers object literals with computed keys into code that builds the same
//! object in ES5, keeping source evaluation order.
//!
//! ## Spec mode (default)
//! ```typescript
//! var o = { a: 1, [b]: 2, c: 3 };
//! ```
//! Becomes:
//! ```javascript
//! var o = _defineProperty(_defineProperty({ a: 1 }, b, 2), "c", 3);
//! ```
//!
//! ## Loose mode
//! ```javascript
//! var _o = { a: 1 };
//! _o[b] = 2;
//! _o.c = 3;
//! _o;
//! ```
//!
//! ## Accessors
//! ```typescript
//! var o = { [a]: 1, get [b]() { return 1; }, set [b](v) {} };
//! ```
//! Becomes:
//! ```javascript
//! var _o = _defineProperty({}, a, 1);
//! var _mutatorMap = {};
//! _mutatorMap[b] = _mutatorMap[b] || {};
//! _mutatorMap[b].get = function () { return 1; };
//! _mutatorMap[b] = _mutatorMap[b] || {};
//! _mutatorMap[b].set = function (v) { };
//! _defineEnumerableProperties(_o, _mutatorMap);
//! _o;
//! ```
//!
//! Properties before the first computed key stay in the initial literal.
//! From the first computed key on, every property is lowered in order, so side
//! effects of keys and values happen exactly as written.
//!
//! A statically known `"__proto__"` key is always assigned (`_o["__proto__"] =
//! v`), in both modes, because only assignment changes the prototype. A key
//! expression that merely evaluates to `"__proto__"` at runtime is lowered like
//! any other key.

mod assign;
mod classify;
mod context;
mod define_chain;
mod mutator_map;

pub use classify::{ClassifiedProperties, classify, computed_key, is_proto_key};
pub use context::OutputSequence;

use crate::transforms::helpers::HelperSource;
use crate::transforms::ir::{IRNode, IRProperty, IRPropertyKind};
use crate::transforms::scope::NameSource;
use context::LoweringContext;
use serde::Deserialize;

/// Hint for the object temporary when the caller has nothing better
const DEFAULT_OBJECT_HINT: &str = "obj";

/// Options for computed property lowering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputedPropertiesOptions {
    /// Use plain assignments instead of `_defineProperty` for init properties
    pub loose: bool,
}

/// Result of lowering one object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// The literal lowered to a single expression with no temporaries.
    Expression(IRNode),
    /// Statements that build the object. The last statement is
    /// `objectRef;`, the value of the original expression.
    Statements {
        body: Vec<IRNode>,
        /// Memoised key temporaries the host must declare (`var _k;`) in the
        /// enclosing function scope.
        hoisted: Vec<String>,
    },
}

impl Replacement {
    /// The expression that yields the built object.
    pub fn value(&self) -> Option<&IRNode> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Statements { body, .. } => match body.last() {
                Some(IRNode::ExpressionStatement(expr)) => Some(expr),
                _ => None,
            },
        }
    }

    /// Collapse into a single expression for hosts that cannot splice
    /// statements into an expression position:
    /// `(_o = {...}, _o[k] = v, _o)`.
    ///
    /// Returns the expression and every temporary that must now be declared in
    /// the enclosing scope (the former `var` bindings first, then memoised keys).
    pub fn into_expression(self) -> (IRNode, Vec<String>) {
        match self {
            Self::Expression(expr) => (expr, Vec::new()),
            Self::Statements { body, hoisted } => {
                let mut declared = Vec::new();
                let mut exprs = Vec::with_capacity(body.len());
                for node in body {
                    match node {
                        IRNode::VarDecl { name, initializer } => {
                            let init = initializer.map_or(IRNode::Undefined, |init| *init);
                            exprs.push(IRNode::assign(IRNode::id(name.clone()), init));
                            declared.push(name);
                        }
                        IRNode::ExpressionStatement(expr) => exprs.push(*expr),
                        other => exprs.push(other),
                    }
                }
                declared.extend(hoisted);
                (IRNode::comma(exprs), declared)
            }
        }
    }
}

/// ES5 computed property transformer - produces IR for object literals
/// with computed keys.
#[derive(Debug, Clone, Default)]
pub struct ComputedPropertiesTransformer {
    options: ComputedPropertiesOptions,
}

impl ComputedPropertiesTransformer {
    pub fn new(options: ComputedPropertiesOptions) -> Self {
        Self { options }
    }

    /// Check if an object literal needs this transform
    pub fn needs_transform(properties: &[IRProperty]) -> bool {
        properties.iter().any(IRProperty::is_computed)
    }

    /// Lower one object literal.
    ///
    /// `hint` names the object temporary if one is needed (typically the
    /// variable being initialized). Returns `None` when the literal has no
    /// computed key and should be left as is.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(properties = properties.len(), loose = self.options.loose)
    )]
    pub fn transform(
        &self,
        properties: &[IRProperty],
        hint: Option<&str>,
        names: &mut dyn NameSource,
        helpers: &mut dyn HelperSource,
    ) -> Option<Replacement> {
        let ClassifiedProperties { prefix, tail } = classify(properties)?;

        let head = IRNode::object(prefix.to_vec());
        let object_hint = hint.unwrap_or(DEFAULT_OBJECT_HINT);
        let mut ctx = LoweringContext::new(head, object_hint, names, helpers);

        for prop in tail {
            match prop.kind {
                IRPropertyKind::Get | IRPropertyKind::Set => {
                    mutator_map::push_mutator_define(&mut ctx, prop);
                }
                IRPropertyKind::Init if is_proto_key(&computed_key(prop)) => {
                    assign::push_assign(&mut ctx, prop);
                }
                IRPropertyKind::Init if self.options.loose => {
                    assign::push_assign(&mut ctx, prop);
                }
                IRPropertyKind::Init => define_chain::push_define_property(&mut ctx, prop),
            }
        }

        if let Some(map) = ctx.mutator_map_ref().map(IRNode::id) {
            let object = ctx.ensure_object_ref();
            let merge = ctx.merge_accessors_helper();
            ctx.body
                .push(IRNode::expr_stmt(IRNode::call(merge, vec![object, map])));
        }

        let output = ctx.finish();
        let mut nodes = output.nodes;

        let Some(object_ref) = output.object_ref else {
            debug_assert_eq!(nodes.len(), 1, "extra statements without a temporary");
            tracing::trace!("lowered to a single expression");
            return nodes.pop().map(Replacement::Expression);
        };

        let mut body: Vec<IRNode> = nodes
            .into_iter()
            .map(|node| {
                if node.is_statement() {
                    node
                } else {
                    IRNode::expr_stmt(node)
                }
            })
            .collect();
        body.push(IRNode::expr_stmt(IRNode::id(object_ref)));

        tracing::trace!(statements = body.len(), "lowered to statements");
        Some(Replacement::Statements {
            body,
            hoisted: output.hoisted,
        })
    }
}

#[cfg(test)]
#[path = "../tests/computed_properties.rs"]
mod tests;
