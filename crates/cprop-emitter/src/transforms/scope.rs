//! Temporary name generation.
//!
//! Lowering needs fresh identifiers (`_obj`, `_mutatorMap`, memoised keys)
//! that cannot collide with anything the program already uses. `UidGenerator`
//! is seeded with every identifier in the program and hands out `_hint`,
//! `_hint2`, `_hint3`, ... skipping names that are taken.

use crate::transforms::ir::{IRNode, IRPropertyKey};
use rustc_hash::FxHashSet;

/// Maximum length of the hint part of a generated name
const MAX_HINT_LEN: usize = 20;

/// Source of collision-free identifiers within the current scope.
pub trait NameSource {
    /// Return an identifier that is unused at the time of the request.
    fn fresh(&mut self, hint: &str) -> String;
}

/// Name source backed by a set of reserved names.
#[derive(Debug, Default, Clone)]
pub struct UidGenerator {
    reserved: FxHashSet<String>,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with every identifier that appears in `program`.
    pub fn for_program(program: &[IRNode]) -> Self {
        let mut generator = Self::new();
        for stmt in program {
            collect_identifiers(stmt, &mut generator.reserved);
        }
        generator
    }

    /// Mark a name as taken.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }
}

impl NameSource for UidGenerator {
    fn fresh(&mut self, hint: &str) -> String {
        let base = sanitize_hint(hint);
        let mut i = 1u32;
        loop {
            let name = if i > 1 {
                format!("_{base}{i}")
            } else {
                format!("_{base}")
            };
            i += 1;
            if !self.reserved.contains(&name) {
                self.reserved.insert(name.clone());
                return name;
            }
        }
    }
}

/// Turn an arbitrary hint into the stem of an identifier.
///
/// Non-identifier characters split words which are camel-cased together;
/// leading underscores and trailing digits are dropped (the generator adds its
/// own prefix and suffix).
pub fn sanitize_hint(hint: &str) -> String {
    let mut out = String::with_capacity(hint.len());
    let mut upper_next = false;
    for ch in hint.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            if upper_next && !out.is_empty() {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    let trimmed = out
        .trim_start_matches('_')
        .trim_end_matches(|c: char| c.is_ascii_digit());
    let mut stem: String = trimmed.chars().take(MAX_HINT_LEN).collect();
    if stem.starts_with(|c: char| c.is_ascii_digit()) {
        stem.insert(0, '_');
    }
    if stem.is_empty() {
        stem.push_str("ref");
    }
    stem
}

/// Derive a naming hint from an expression: `foo` → `foo`, `a.b` → `a$b`,
/// `make()` → `make`, `"x"` → `x`. Anything else is `ref`.
pub fn hint_for_node(node: &IRNode) -> String {
    let mut parts = Vec::new();
    gather_hint_parts(node, &mut parts);
    let joined = parts.join("$");
    let joined = joined.trim_start_matches('_');
    if joined.is_empty() {
        "ref".to_string()
    } else {
        joined.chars().take(MAX_HINT_LEN).collect()
    }
}

fn gather_hint_parts(node: &IRNode, parts: &mut Vec<String>) {
    match node {
        IRNode::Identifier(name) => parts.push(name.clone()),
        IRNode::StringLiteral(s) | IRNode::NumericLiteral(s) => parts.push(s.clone()),
        IRNode::This => parts.push("this".to_string()),
        IRNode::PropertyAccess { object, property } => {
            gather_hint_parts(object, parts);
            parts.push(property.clone());
        }
        IRNode::ElementAccess { object, index } => {
            gather_hint_parts(object, parts);
            gather_hint_parts(index, parts);
        }
        IRNode::CallExpr { callee, .. } => gather_hint_parts(callee, parts),
        IRNode::Parenthesized(inner) => gather_hint_parts(inner, parts),
        IRNode::BinaryExpr { left, operator, .. } if operator == "=" => {
            gather_hint_parts(left, parts)
        }
        _ => {}
    }
}

/// Collect every name bound or referenced in `node`.
pub fn collect_identifiers(node: &IRNode, names: &mut FxHashSet<String>) {
    match node {
        IRNode::Identifier(name) => {
            names.insert(name.clone());
        }
        IRNode::NumericLiteral(_)
        | IRNode::StringLiteral(_)
        | IRNode::BooleanLiteral(_)
        | IRNode::NullLiteral
        | IRNode::Undefined
        | IRNode::This
        | IRNode::Raw(_) => {}
        IRNode::BinaryExpr { left, right, .. } | IRNode::LogicalOr { left, right } => {
            collect_identifiers(left, names);
            collect_identifiers(right, names);
        }
        IRNode::CallExpr { callee, arguments } => {
            collect_identifiers(callee, names);
            for arg in arguments {
                collect_identifiers(arg, names);
            }
        }
        IRNode::PropertyAccess { object, .. } => collect_identifiers(object, names),
        IRNode::ElementAccess { object, index } => {
            collect_identifiers(object, names);
            collect_identifiers(index, names);
        }
        IRNode::Parenthesized(inner) | IRNode::ExpressionStatement(inner) => {
            collect_identifiers(inner, names)
        }
        IRNode::CommaExpr(nodes)
        | IRNode::ArrayLiteral(nodes)
        | IRNode::VarDeclList(nodes)
        | IRNode::Block(nodes)
        | IRNode::Sequence(nodes) => {
            for n in nodes {
                collect_identifiers(n, names);
            }
        }
        IRNode::ObjectLiteral { properties } => {
            for prop in properties {
                if let IRPropertyKey::Computed(key) = &prop.key {
                    collect_identifiers(key, names);
                }
                collect_identifiers(&prop.value, names);
            }
        }
        IRNode::FunctionExpr {
            name,
            parameters,
            body,
        } => {
            if let Some(name) = name {
                names.insert(name.clone());
            }
            for param in parameters {
                names.insert(param.name.clone());
            }
            for stmt in body {
                collect_identifiers(stmt, names);
            }
        }
        IRNode::FunctionDecl {
            name,
            parameters,
            body,
        } => {
            names.insert(name.clone());
            for param in parameters {
                names.insert(param.name.clone());
            }
            for stmt in body {
                collect_identifiers(stmt, names);
            }
        }
        IRNode::VarDecl { name, initializer } => {
            names.insert(name.clone());
            if let Some(init) = initializer {
                collect_identifiers(init, names);
            }
        }
        IRNode::ReturnStatement(expr) => {
            if let Some(expr) = expr {
                collect_identifiers(expr, names);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scope.rs"]
mod tests;
