//! Helper methods for the IR printer.
//!
//! Contains function body emission, object literal and property emission,
//! and the low-level output writers.

use super::*;
use std::fmt::Write as _;

impl<'a> IRPrinter<'a> {
    /// Emit a function body.
    ///
    /// Generated functions carry no source layout, so the shape follows the
    /// body: `{ }` when empty, a single line for one simple statement, and an
    /// indented block otherwise.
    pub(super) fn emit_function_body(&mut self, body: &[IRNode]) {
        if body.is_empty() {
            self.write("{ }");
            return;
        }

        if body.len() == 1 && !Self::is_compound_statement(&body[0]) {
            self.write("{ ");
            self.emit_statement(&body[0]);
            self.write(" }");
            return;
        }

        self.emit_block(body);
    }

    pub(super) fn emit_block(&mut self, stmts: &[IRNode]) {
        self.write("{");
        self.write_line();
        self.increase_indent();
        for stmt in stmts {
            self.write_indent();
            self.emit_statement(stmt);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    const fn is_compound_statement(node: &IRNode) -> bool {
        matches!(
            node,
            IRNode::Block(_) | IRNode::FunctionDecl { .. } | IRNode::Sequence(_)
        )
    }

    pub(super) fn emit_comma_separated(&mut self, nodes: &[IRNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(node);
        }
    }

    pub(super) fn emit_object_literal(&mut self, properties: &[IRProperty]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, prop) in properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_property(prop);
        }
        self.write(" }");
    }

    pub(super) fn emit_parameters(&mut self, params: &[IRParam]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if param.rest {
                self.write("...");
            }
            self.write(&param.name);
        }
    }

    pub(super) fn emit_property(&mut self, prop: &IRProperty) {
        match prop.kind {
            IRPropertyKind::Get => self.write("get "),
            IRPropertyKind::Set => self.write("set "),
            IRPropertyKind::Init => {}
        }

        match &prop.key {
            IRPropertyKey::Identifier(name) => self.write(name),
            IRPropertyKey::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            IRPropertyKey::NumericLiteral(n) => self.write(n),
            IRPropertyKey::Computed(expr) => {
                self.write("[");
                self.emit_node(expr);
                self.write("]");
            }
        }

        match (&prop.kind, &prop.value) {
            (IRPropertyKind::Init, value) => {
                self.write(": ");
                self.emit_node(value);
            }
            // Accessors print in method form: `get x() { ... }`
            (
                _,
                IRNode::FunctionExpr {
                    parameters, body, ..
                },
            ) => {
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_function_body(body);
            }
            (_, value) => {
                self.write(": ");
                self.emit_node(value);
            }
        }
    }

    pub(super) fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(super) fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                // `\0` followed by a digit would read as an octal escape
                '\0' => self.output.push_str("\\x00"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    // Control characters as \u00NN
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    pub(super) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    pub(super) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(super) const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

impl Default for IRPrinter<'_> {
    fn default() -> Self {
        Self::new()
    }
}
