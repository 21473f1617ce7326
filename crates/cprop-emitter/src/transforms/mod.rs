//! JavaScript Transforms
//!
//! This module contains the transform that lowers object literals with
//! computed keys to ES5, plus the pieces it is built from.
//!
//! # Architecture
//!
//! Transforms follow a two-phase approach:
//!
//! 1. **Transform Phase**: Analyze IR object literals and produce new IR
//!    (a single expression or a list of statements).
//!
//! 2. **Print Phase**: The printer walks IR trees and emits JavaScript strings.
//!
//! The transform never generates names or helper definitions itself. It asks
//! a `NameSource` for fresh temporaries and a `HelperSource` for helper
//! references, so hosts decide scoping and helper placement.
//!
//! | Module | Role |
//! |--------|------|
//! | `computed_properties` | Classifier, emitters and orchestrator |
//! | `helpers` | `_defineProperty` / `_defineEnumerableProperties` references and definitions |
//! | `scope` | Collision-free temporary names |
//! | `ir` | Node model |
//! | `ir_printer` | IR → JavaScript text |

pub mod computed_properties;
pub mod helpers;
pub mod ir;
pub mod ir_printer;
pub mod scope;

pub use computed_properties::{
    ComputedPropertiesOptions, ComputedPropertiesTransformer, Replacement,
};
