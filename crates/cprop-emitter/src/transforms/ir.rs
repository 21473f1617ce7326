//! Lowered IR (Intermediate Representation) for Transforms
//!
//! This module defines the tree-structured IR that the computed-property
//! transform reads and produces. The IR nodes represent JavaScript constructs
//! that the printer can emit.
//!
//! # Architecture
//!
//! A host hands the transform an object literal as a list of `IRProperty`
//! values. The transform produces new IR (a single expression or an ordered
//! list of statements), and the printer walks these trees to emit JavaScript.
//!
//! Nodes are built through the typed constructors at the bottom of this file
//! (`IRNode::call`, `IRNode::elem`, ...) rather than through string templates.
//!
//! # Serialization
//!
//! Every node derives `serde` so a program can be handed to the CLI as JSON
//! (externally tagged: `{"Identifier": "b"}`, `{"CallExpr": {...}}`).

use serde::{Deserialize, Serialize};

/// Intermediate Representation node for transformed JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14`
    NumericLiteral(String),

    /// String literal: `"hello"`, `'world'`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// Null literal: `null`
    NullLiteral,

    /// Undefined: `void 0`
    Undefined,

    // =========================================================================
    // Identifiers
    // =========================================================================
    /// Identifier: `foo`, `_bar`
    Identifier(String),

    /// This keyword
    This,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Binary expression: `left op right`
    BinaryExpr {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },

    /// Call expression: `callee(args)`
    CallExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Element access: `object[index]`
    ElementAccess { object: Box<Self>, index: Box<Self> },

    /// Parenthesized expression: `(expr)`
    Parenthesized(Box<Self>),

    /// Comma expression: `(a, b, c)`
    CommaExpr(Vec<Self>),

    /// Array literal: `[a, b, c]`
    ArrayLiteral(Vec<Self>),

    /// Object literal: `{ key: value, ... }`
    ObjectLiteral { properties: Vec<IRProperty> },

    /// Function expression: `function name(params) { body }`
    FunctionExpr {
        name: Option<String>,
        parameters: Vec<IRParam>,
        body: Vec<Self>,
    },

    /// Logical OR: `left || right`
    LogicalOr { left: Box<Self>, right: Box<Self> },

    // =========================================================================
    // Statements
    // =========================================================================
    /// Variable declaration: `var x = value;`
    VarDecl {
        name: String,
        initializer: Option<Box<Self>>,
    },

    /// Multiple variable declarations: `var a = 1, b = 2;`
    VarDeclList(Vec<Self>),

    /// Expression statement: `expr;`
    ExpressionStatement(Box<Self>),

    /// Return statement: `return expr;`
    ReturnStatement(Option<Box<Self>>),

    /// Block statement: `{ statements }`
    Block(Vec<Self>),

    // =========================================================================
    // Declarations
    // =========================================================================
    /// Function declaration: `function name(params) { body }`
    FunctionDecl {
        name: String,
        parameters: Vec<IRParam>,
        body: Vec<Self>,
    },

    // =========================================================================
    // Special
    // =========================================================================
    /// Raw JavaScript string (escape hatch for helper bodies)
    Raw(String),

    /// Sequence of statements/nodes
    Sequence(Vec<Self>),
}

/// Property in an object literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IRProperty {
    pub key: IRPropertyKey,
    pub value: IRNode,
    pub kind: IRPropertyKind,
}

/// Object property key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IRPropertyKey {
    Identifier(String),
    StringLiteral(String),
    NumericLiteral(String),
    Computed(Box<IRNode>),
}

/// Object property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IRPropertyKind {
    Init,
    Get,
    Set,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IRParam {
    pub name: String,
    #[serde(default)]
    pub rest: bool,
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create an element access
    pub fn elem(object: Self, index: Self) -> Self {
        Self::ElementAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Create a binary expression
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpr {
            left: Box::new(left),
            operator: op.into(),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, "=", value)
    }

    /// Create a var declaration
    pub fn var_decl(name: impl Into<String>, init: Option<Self>) -> Self {
        Self::VarDecl {
            name: name.into(),
            initializer: init.map(Box::new),
        }
    }

    /// Create a return statement
    pub fn ret(expr: Option<Self>) -> Self {
        Self::ReturnStatement(expr.map(Box::new))
    }

    /// Create a function expression
    pub const fn func_expr(name: Option<String>, params: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::FunctionExpr {
            name,
            parameters: params,
            body,
        }
    }

    /// Create a function declaration
    pub fn func_decl(name: impl Into<String>, params: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::FunctionDecl {
            name: name.into(),
            parameters: params,
            body,
        }
    }

    /// Create `this` reference
    pub const fn this() -> Self {
        Self::This
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Create an object literal
    pub const fn object(props: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral { properties: props }
    }

    /// Create an empty object literal
    pub const fn empty_object() -> Self {
        Self::ObjectLiteral {
            properties: Vec::new(),
        }
    }

    /// Create a logical OR expression: `left || right`
    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::LogicalOr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a comma expression: `(a, b, c)`
    pub const fn comma(exprs: Vec<Self>) -> Self {
        Self::CommaExpr(exprs)
    }

    /// True for nodes that only make sense in statement position.
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::VarDecl { .. }
                | Self::VarDeclList(_)
                | Self::ExpressionStatement(_)
                | Self::ReturnStatement(_)
                | Self::Block(_)
                | Self::FunctionDecl { .. }
                | Self::Sequence(_)
        )
    }

    /// True for literal values.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::NumericLiteral(_)
                | Self::StringLiteral(_)
                | Self::BooleanLiteral(_)
                | Self::NullLiteral
        )
    }
}

impl IRParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: true,
        }
    }
}

impl IRProperty {
    /// Create a simple property with identifier key: `{ key: value }`
    pub fn init(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value,
            kind: IRPropertyKind::Init,
        }
    }

    /// Create a property with string literal key: `{ "key": value }`
    pub fn init_string(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::StringLiteral(key.into()),
            value,
            kind: IRPropertyKind::Init,
        }
    }

    /// Create a computed property: `{ [key]: value }`
    pub fn computed(key: IRNode, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Computed(Box::new(key)),
            value,
            kind: IRPropertyKind::Init,
        }
    }

    /// Create a getter property
    pub fn getter(key: impl Into<String>, get: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value: get,
            kind: IRPropertyKind::Get,
        }
    }

    /// Create a setter property
    pub fn setter(key: impl Into<String>, set: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value: set,
            kind: IRPropertyKind::Set,
        }
    }

    /// Create an accessor with a computed key: `get [key]() {}` / `set [key](v) {}`
    pub fn computed_accessor(kind: IRPropertyKind, key: IRNode, function: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Computed(Box::new(key)),
            value: function,
            kind,
        }
    }

    /// Whether the key is evaluated at runtime.
    pub const fn is_computed(&self) -> bool {
        matches!(self.key, IRPropertyKey::Computed(_))
    }

    pub const fn is_accessor(&self) -> bool {
        matches!(self.kind, IRPropertyKind::Get | IRPropertyKind::Set)
    }
}
