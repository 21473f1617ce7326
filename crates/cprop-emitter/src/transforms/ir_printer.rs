//! IR Printer - Emits JavaScript strings from IR nodes
//!
//! This is the second phase of the transform/print split: transforms build
//! `IRNode` trees, and `IRPrinter` walks them to produce JavaScript text.
//!
//! The printer is deliberately simple. It does not track source positions and
//! it inserts parentheses only where an IR shape would otherwise print as a
//! different program (object/function at statement start, low-precedence
//! operands of member access).

#[path = "ir_printer_helpers.rs"]
mod ir_printer_helpers;

use crate::transforms::ir::{IRNode, IRParam, IRProperty, IRPropertyKey, IRPropertyKind};

/// IR printer that converts IR nodes to JavaScript strings
pub struct IRPrinter<'a> {
    output: String,
    indent_level: u32,
    indent_str: &'a str,
}

impl<'a> IRPrinter<'a> {
    /// Create a new IR printer
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Create a printer with a custom indentation unit
    pub const fn with_indent(indent_str: &'a str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str,
        }
    }

    /// Emit a single node and return the printed text
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = IRPrinter::new();
        printer.emit_node(node);
        printer.output
    }

    /// Emit a list of top-level statements, one per line
    pub fn emit_program(statements: &[IRNode]) -> String {
        let mut printer = IRPrinter::new();
        for stmt in statements {
            printer.write_indent();
            printer.emit_statement(stmt);
            printer.write_line();
        }
        printer.output
    }

    /// Emit a node into this printer's buffer
    pub fn emit(&mut self, node: &IRNode) -> &str {
        self.emit_node(node);
        &self.output
    }

    /// Get the output so far
    pub fn get_output(&self) -> &str {
        &self.output
    }

    /// Take the output, leaving the printer empty
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Emit a node in statement position. Bare expressions get a trailing `;`.
    fn emit_statement(&mut self, node: &IRNode) {
        if node.is_statement() || matches!(node, IRNode::Raw(_)) {
            self.emit_node(node);
        } else {
            self.emit_node(&IRNode::expr_stmt(node.clone()));
        }
    }

    fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(n) => self.write(n),
            IRNode::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            IRNode::BooleanLiteral(b) => self.write(if *b { "true" } else { "false" }),
            IRNode::NullLiteral => self.write("null"),
            IRNode::Undefined => self.write("void 0"),
            IRNode::Identifier(name) => self.write(name),
            IRNode::This => self.write("this"),
            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => {
                self.emit_node(left);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.emit_node(right);
            }
            IRNode::CallExpr { callee, arguments } => {
                self.emit_member_object(callee);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::PropertyAccess { object, property } => {
                self.emit_member_object(object);
                self.write(".");
                self.write(property);
            }
            IRNode::ElementAccess { object, index } => {
                self.emit_member_object(object);
                self.write("[");
                self.emit_node(index);
                self.write("]");
            }
            IRNode::Parenthesized(inner) => {
                self.write("(");
                self.emit_node(inner);
                self.write(")");
            }
            IRNode::CommaExpr(exprs) => {
                self.write("(");
                self.emit_comma_separated(exprs);
                self.write(")");
            }
            IRNode::ArrayLiteral(elements) => {
                self.write("[");
                self.emit_comma_separated(elements);
                self.write("]");
            }
            IRNode::ObjectLiteral { properties } => self.emit_object_literal(properties),
            IRNode::FunctionExpr {
                name,
                parameters,
                body,
            } => {
                self.write("function ");
                if let Some(name) = name {
                    self.write(name);
                }
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_function_body(body);
            }
            IRNode::LogicalOr { left, right } => {
                self.emit_node(left);
                self.write(" || ");
                self.emit_node(right);
            }
            IRNode::VarDecl { name, initializer } => {
                self.write("var ");
                self.emit_declarator(name, initializer.as_deref());
                self.write(";");
            }
            IRNode::VarDeclList(decls) => {
                self.write("var ");
                let mut first = true;
                for decl in decls {
                    if let IRNode::VarDecl { name, initializer } = decl {
                        if !first {
                            self.write(", ");
                        }
                        first = false;
                        self.emit_declarator(name, initializer.as_deref());
                    }
                }
                self.write(";");
            }
            IRNode::ExpressionStatement(expr) => {
                if Self::starts_with_brace_or_function(expr) {
                    self.write("(");
                    self.emit_node(expr);
                    self.write(");");
                } else {
                    self.emit_node(expr);
                    self.write(";");
                }
            }
            IRNode::ReturnStatement(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_node(expr);
                }
                self.write(";");
            }
            IRNode::Block(stmts) => self.emit_block(stmts),
            IRNode::FunctionDecl {
                name,
                parameters,
                body,
            } => {
                self.write("function ");
                self.write(name);
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_function_body(body);
            }
            IRNode::Raw(text) => self.write(text),
            IRNode::Sequence(nodes) => {
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        self.write_line();
                        self.write_indent();
                    }
                    self.emit_statement(node);
                }
            }
        }
    }

    fn emit_declarator(&mut self, name: &str, initializer: Option<&IRNode>) {
        self.write(name);
        if let Some(init) = initializer {
            self.write(" = ");
            self.emit_node(init);
        }
    }

    /// Emit the object of a member access or the callee of a call,
    /// parenthesizing operands that bind looser than `.`/`[]`/`()`.
    fn emit_member_object(&mut self, object: &IRNode) {
        let needs_parens = matches!(
            object,
            IRNode::BinaryExpr { .. } | IRNode::LogicalOr { .. } | IRNode::FunctionExpr { .. }
        );
        if needs_parens {
            self.write("(");
            self.emit_node(object);
            self.write(")");
        } else {
            self.emit_node(object);
        }
    }

    /// An expression statement may not begin with `{` or `function`.
    fn starts_with_brace_or_function(expr: &IRNode) -> bool {
        match expr {
            IRNode::ObjectLiteral { .. } | IRNode::FunctionExpr { .. } => true,
            IRNode::BinaryExpr { left, .. } | IRNode::LogicalOr { left, .. } => {
                Self::starts_with_brace_or_function(left)
            }
            IRNode::CallExpr { callee, .. } => Self::starts_with_brace_or_function(callee),
            IRNode::PropertyAccess { object, .. } | IRNode::ElementAccess { object, .. } => {
                Self::starts_with_brace_or_function(object)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/ir_printer.rs"]
mod tests;
