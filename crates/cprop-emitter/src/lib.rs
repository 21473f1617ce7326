//! Object literal computed-property lowering for the cprop compiler.
//!
//! This crate rewrites object literals whose keys are computed at runtime
//! (`{ [k]: v }`) into ES5 code that builds the same object in the same
//! evaluation order:
//! - `transforms::computed_properties` lowers one literal
//! - `lowering_pass` applies it to every literal in a program
//! - `transforms::ir_printer` prints the result as JavaScript

pub mod lowering_pass;
pub mod transforms;

pub use lowering_pass::{ComputedPropertiesPass, LoweredProgram, MAX_LOWERING_DEPTH};
pub use transforms::helpers::{FileHelpers, HelperName, HelperSource, HelpersNeeded};
pub use transforms::ir::{IRNode, IRParam, IRProperty, IRPropertyKey, IRPropertyKind};
pub use transforms::ir_printer::IRPrinter;
pub use transforms::scope::{NameSource, UidGenerator};
pub use transforms::{ComputedPropertiesOptions, ComputedPropertiesTransformer, Replacement};
