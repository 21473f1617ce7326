//! Lowering Pass - applies computed property lowering to a whole program
//!
//! The pass walks a program bottom-up: an object literal's keys and values
//! are lowered before the literal itself, the way an exit visitor sees them.
//! Every literal with a computed key is replaced in place by the expression
//! form of its lowering:
//!
//! ```typescript
//! var o = { [k]: 1, x: 2 };
//! ```
//!
//! Becomes:
//!
//! ```javascript
//! var o = _defineProperty(_defineProperty({}, k, 1), "x", 2);
//! ```
//!
//! or, when temporaries are unavoidable (`{ [k]: 1, get x() { ... } }`):
//!
//! ```javascript
//! var _o, _mutatorMap;
//! var o = (_o = _defineProperty({}, k, 1), _mutatorMap = {}, ..., _defineEnumerableProperties(_o, _mutatorMap), _o);
//! ```
//!
//! Temporaries are declared with a single `var` at the top of the nearest
//! enclosing function body, or at the top of the program.

use crate::transforms::computed_properties::{
    ComputedPropertiesOptions, ComputedPropertiesTransformer,
};
use crate::transforms::helpers::FileHelpers;
use crate::transforms::ir::{IRNode, IRProperty, IRPropertyKey};
use crate::transforms::ir_printer::IRPrinter;
use crate::transforms::scope::UidGenerator;

/// Maximum recursion depth for IR traversal to prevent stack overflow
pub const MAX_LOWERING_DEPTH: u32 = 500;

/// Output of a lowering run.
#[derive(Debug)]
pub struct LoweredProgram {
    pub statements: Vec<IRNode>,
    pub helpers: FileHelpers,
    /// Number of object literals that were rewritten
    pub lowered_literals: usize,
}

impl LoweredProgram {
    /// Print the program, optionally preceded by the helpers it uses.
    pub fn print(&self, emit_helpers: bool) -> String {
        let mut out = String::new();
        if emit_helpers {
            out.push_str(&IRPrinter::emit_program(&self.helpers.definitions()));
        }
        out.push_str(&IRPrinter::emit_program(&self.statements));
        out
    }
}

/// Computed property lowering over a whole program.
pub struct ComputedPropertiesPass {
    transformer: ComputedPropertiesTransformer,
    names: UidGenerator,
    helpers: FileHelpers,
    /// Temporaries to declare, one list per enclosing function scope
    scopes: Vec<Vec<String>>,
    /// Current recursion depth for stack overflow protection
    visit_depth: u32,
    lowered_literals: usize,
}

impl ComputedPropertiesPass {
    pub fn new(options: ComputedPropertiesOptions) -> Self {
        Self {
            transformer: ComputedPropertiesTransformer::new(options),
            names: UidGenerator::new(),
            helpers: FileHelpers::new(),
            scopes: Vec::new(),
            visit_depth: 0,
            lowered_literals: 0,
        }
    }

    /// Run the pass over a list of top-level statements.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(mut self, program: Vec<IRNode>) -> LoweredProgram {
        self.names = UidGenerator::for_program(&program);
        // Helper identifiers must be bound before the first temporary.
        self.helpers = FileHelpers::bind_unique(&mut self.names);
        let statements = self.lower_scope(program);
        tracing::debug!(
            lowered = self.lowered_literals,
            helpers = ?self.helpers.needed(),
            "computed property lowering finished"
        );
        LoweredProgram {
            statements,
            helpers: self.helpers,
            lowered_literals: self.lowered_literals,
        }
    }

    /// Lower the statements of a program or function body and prepend the
    /// declarations of any temporaries they needed.
    fn lower_scope(&mut self, statements: Vec<IRNode>) -> Vec<IRNode> {
        self.scopes.push(Vec::new());
        let mut lowered: Vec<IRNode> = statements
            .into_iter()
            .map(|stmt| self.lower_node(stmt, None))
            .collect();
        let temps = self.scopes.pop().unwrap_or_default();
        if !temps.is_empty() {
            let decls = temps
                .into_iter()
                .map(|name| IRNode::var_decl(name, None))
                .collect();
            lowered.insert(0, IRNode::VarDeclList(decls));
        }
        lowered
    }

    fn lower_all(&mut self, nodes: Vec<IRNode>) -> Vec<IRNode> {
        nodes
            .into_iter()
            .map(|node| self.lower_node(node, None))
            .collect()
    }

    fn lower_boxed(&mut self, node: Box<IRNode>, hint: Option<&str>) -> Box<IRNode> {
        Box::new(self.lower_node(*node, hint))
    }

    /// Lower `node` and everything beneath it. `hint` names the object
    /// temporary when `node` is an object literal bound to a name.
    fn lower_node(&mut self, node: IRNode, hint: Option<&str>) -> IRNode {
        if self.visit_depth >= MAX_LOWERING_DEPTH {
            tracing::warn!(
                depth = self.visit_depth,
                "lowering depth limit reached, leaving subtree untouched"
            );
            return node;
        }
        self.visit_depth += 1;
        let result = self.lower_node_inner(node, hint);
        self.visit_depth -= 1;
        result
    }

    fn lower_node_inner(&mut self, node: IRNode, hint: Option<&str>) -> IRNode {
        match node {
            IRNode::ObjectLiteral { properties } => self.lower_object_literal(properties, hint),
            IRNode::VarDecl { name, initializer } => {
                let initializer =
                    initializer.map(|init| self.lower_boxed(init, Some(name.as_str())));
                IRNode::VarDecl { name, initializer }
            }
            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => {
                let left = self.lower_boxed(left, None);
                let target = match (operator.as_str(), left.as_ref()) {
                    ("=", IRNode::Identifier(name)) => Some(name.clone()),
                    _ => None,
                };
                let right = self.lower_boxed(right, target.as_deref());
                IRNode::BinaryExpr {
                    left,
                    operator,
                    right,
                }
            }
            IRNode::CallExpr { callee, arguments } => IRNode::CallExpr {
                callee: self.lower_boxed(callee, None),
                arguments: self.lower_all(arguments),
            },
            IRNode::PropertyAccess { object, property } => IRNode::PropertyAccess {
                object: self.lower_boxed(object, None),
                property,
            },
            IRNode::ElementAccess { object, index } => IRNode::ElementAccess {
                object: self.lower_boxed(object, None),
                index: self.lower_boxed(index, None),
            },
            IRNode::Parenthesized(inner) => IRNode::Parenthesized(self.lower_boxed(inner, hint)),
            IRNode::CommaExpr(exprs) => IRNode::CommaExpr(self.lower_all(exprs)),
            IRNode::ArrayLiteral(elements) => IRNode::ArrayLiteral(self.lower_all(elements)),
            IRNode::LogicalOr { left, right } => IRNode::LogicalOr {
                left: self.lower_boxed(left, None),
                right: self.lower_boxed(right, None),
            },
            IRNode::FunctionExpr {
                name,
                parameters,
                body,
            } => IRNode::FunctionExpr {
                name,
                parameters,
                body: self.lower_scope(body),
            },
            IRNode::FunctionDecl {
                name,
                parameters,
                body,
            } => IRNode::FunctionDecl {
                name,
                parameters,
                body: self.lower_scope(body),
            },
            IRNode::VarDeclList(decls) => IRNode::VarDeclList(self.lower_all(decls)),
            IRNode::ExpressionStatement(expr) => {
                IRNode::ExpressionStatement(self.lower_boxed(expr, None))
            }
            IRNode::ReturnStatement(expr) => {
                IRNode::ReturnStatement(expr.map(|expr| self.lower_boxed(expr, None)))
            }
            IRNode::Block(stmts) => IRNode::Block(self.lower_all(stmts)),
            IRNode::Sequence(nodes) => IRNode::Sequence(self.lower_all(nodes)),
            leaf @ (IRNode::NumericLiteral(_)
            | IRNode::StringLiteral(_)
            | IRNode::BooleanLiteral(_)
            | IRNode::NullLiteral
            | IRNode::Undefined
            | IRNode::Identifier(_)
            | IRNode::This
            | IRNode::Raw(_)) => leaf,
        }
    }

    fn lower_object_literal(&mut self, properties: Vec<IRProperty>, hint: Option<&str>) -> IRNode {
        let properties: Vec<IRProperty> = properties
            .into_iter()
            .map(|prop| self.lower_property(prop))
            .collect();

        let Some(replacement) =
            self.transformer
                .transform(&properties, hint, &mut self.names, &mut self.helpers)
        else {
            return IRNode::object(properties);
        };

        self.lowered_literals += 1;
        let (expr, temps) = replacement.into_expression();
        if let Some(scope) = self.scopes.last_mut() {
            scope.extend(temps);
        }
        expr
    }

    fn lower_property(&mut self, prop: IRProperty) -> IRProperty {
        let IRProperty { key, value, kind } = prop;
        let (key, value) = match key {
            IRPropertyKey::Computed(expr) => {
                let key = IRPropertyKey::Computed(self.lower_boxed(expr, None));
                (key, self.lower_node(value, None))
            }
            IRPropertyKey::Identifier(name) => {
                let value = self.lower_node(value, Some(name.as_str()));
                (IRPropertyKey::Identifier(name), value)
            }
            other => (other, self.lower_node(value, None)),
        };
        IRProperty { key, value, kind }
    }
}

#[cfg(test)]
#[path = "../tests/lowering_pass.rs"]
mod tests;
