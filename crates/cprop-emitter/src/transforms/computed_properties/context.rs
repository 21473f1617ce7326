//! Per-literal lowering state.
//!
//! `OutputSequence` is the ordered list of emitted nodes. It only supports
//! appending and rewriting its first or last element, which are the two
//! in-place edits lowering ever makes (binding the head to a temporary, and
//! nesting the previous define-property call into a new one).
//!
//! `LoweringContext` owns the sequence plus the lazily created temporaries.
//! Each `ensure_*` accessor creates its binding on first use and returns the
//! same reference afterwards.

use crate::transforms::helpers::{HelperName, HelperSource};
use crate::transforms::ir::IRNode;
use crate::transforms::scope::NameSource;

/// Hint for the mutator map temporary
const MUTATOR_MAP_HINT: &str = "mutatorMap";

/// Ordered output of one literal's rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSequence {
    nodes: Vec<IRNode>,
}

impl OutputSequence {
    /// Start a sequence whose first element is `head`.
    pub fn new(head: IRNode) -> Self {
        Self { nodes: vec![head] }
    }

    pub fn push(&mut self, node: IRNode) {
        self.nodes.push(node);
    }

    pub fn first(&self) -> Option<&IRNode> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&IRNode> {
        self.nodes.last()
    }

    /// Rewrite the first element in place.
    pub fn replace_first(&mut self, f: impl FnOnce(IRNode) -> IRNode) {
        if let Some(first) = self.nodes.first_mut() {
            let head = std::mem::replace(first, IRNode::Undefined);
            *first = f(head);
        }
    }

    /// Rewrite the last element in place.
    pub fn replace_last(&mut self, f: impl FnOnce(IRNode) -> IRNode) {
        if let Some(last) = self.nodes.pop() {
            self.nodes.push(f(last));
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_vec(self) -> Vec<IRNode> {
        self.nodes
    }
}

/// Everything a finished rewrite hands back to the orchestrator.
pub(super) struct LoweringOutput {
    pub nodes: Vec<IRNode>,
    pub object_ref: Option<String>,
    pub hoisted: Vec<String>,
}

/// Mutable state threaded through the emitters for one object literal.
pub(super) struct LoweringContext<'a> {
    pub body: OutputSequence,
    object_ref: Option<String>,
    mutator_map_ref: Option<String>,
    define_property: Option<IRNode>,
    hoisted: Vec<String>,
    object_hint: &'a str,
    names: &'a mut dyn NameSource,
    helpers: &'a mut dyn HelperSource,
}

impl<'a> LoweringContext<'a> {
    pub fn new(
        head: IRNode,
        object_hint: &'a str,
        names: &'a mut dyn NameSource,
        helpers: &'a mut dyn HelperSource,
    ) -> Self {
        Self {
            body: OutputSequence::new(head),
            object_ref: None,
            mutator_map_ref: None,
            define_property: None,
            hoisted: Vec::new(),
            object_hint,
            names,
            helpers,
        }
    }

    /// Reference to the object under construction, binding the head of the
    /// sequence to a temporary the first time it is needed ("deopt").
    pub fn ensure_object_ref(&mut self) -> IRNode {
        if let Some(name) = &self.object_ref {
            return IRNode::id(name.clone());
        }

        let name = self.names.fresh(self.object_hint);
        tracing::debug!(temp = %name, "object literal deopt: binding to temporary");
        let binding = name.clone();
        self.body
            .replace_first(move |head| IRNode::var_decl(binding, Some(head)));
        self.object_ref = Some(name.clone());
        IRNode::id(name)
    }

    pub fn object_ref(&self) -> Option<&str> {
        self.object_ref.as_deref()
    }

    /// Reference to the mutator map, declaring it as `var _mutatorMap = {}`
    /// on first use. Creating the map always deopts the object reference.
    pub fn ensure_mutator_map(&mut self) -> IRNode {
        if let Some(name) = &self.mutator_map_ref {
            return IRNode::id(name.clone());
        }

        self.ensure_object_ref();
        let name = self.names.fresh(MUTATOR_MAP_HINT);
        self.body
            .push(IRNode::var_decl(name.clone(), Some(IRNode::empty_object())));
        self.mutator_map_ref = Some(name.clone());
        IRNode::id(name)
    }

    pub fn mutator_map_ref(&self) -> Option<&str> {
        self.mutator_map_ref.as_deref()
    }

    /// `defineProperty` helper reference, requested once per literal.
    pub fn define_property_helper(&mut self) -> IRNode {
        if let Some(helper) = &self.define_property {
            return helper.clone();
        }
        let helper = self.helpers.helper(HelperName::DefineProperty);
        self.define_property = Some(helper.clone());
        helper
    }

    pub fn merge_accessors_helper(&mut self) -> IRNode {
        self.helpers.helper(HelperName::DefineEnumerableProperties)
    }

    /// Fresh temporary that the host must declare in the enclosing scope.
    pub fn hoisted_temp(&mut self, hint: &str) -> String {
        let name = self.names.fresh(hint);
        self.hoisted.push(name.clone());
        name
    }

    pub fn finish(self) -> LoweringOutput {
        LoweringOutput {
            nodes: self.body.into_vec(),
            object_ref: self.object_ref,
            hoisted: self.hoisted,
        }
    }
}

#[cfg(test)]
#[path = "../tests/context.rs"]
mod tests;
