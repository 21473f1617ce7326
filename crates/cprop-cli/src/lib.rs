//! Command-line driver for cprop.
//!
//! Reads a program as JSON IR, lowers computed object-literal keys and prints
//! the resulting JavaScript.

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
