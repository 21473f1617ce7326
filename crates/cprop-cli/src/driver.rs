use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Path, PathBuf};

use cprop_emitter::{ComputedPropertiesPass, IRNode, IRPrinter, IRPropertyKey};

use crate::args::CliArgs;
use crate::config::{ResolvedOptions, find_config, load_config, resolve_options};

/// Run one invocation: load options, lower the input program and write the
/// result.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<()> {
    let options = load_options(args, cwd)?;
    let input = cwd.join(&args.input);
    let program = read_program(&input)?;
    validate_accessors(&program)
        .with_context(|| format!("invalid program: {}", input.display()))?;

    let output = compile(program, options);
    write_output(args.out.as_ref().map(|out| cwd.join(out)), &output)
}

/// Merge `--config` (or `cprop.json` in `cwd`) with the command-line flags.
pub fn load_options(args: &CliArgs, cwd: &Path) -> Result<ResolvedOptions> {
    let config_path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    let config = config_path.as_deref().map(load_config).transpose()?;
    if let Some(path) = &config_path {
        tracing::debug!(config = %path.display(), "loaded config");
    }
    Ok(resolve_options(config.as_ref(), args))
}

pub fn read_program(path: &Path) -> Result<Vec<IRNode>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse input as IR: {}", path.display()))
}

/// Lower and print a program.
pub fn compile(program: Vec<IRNode>, options: ResolvedOptions) -> String {
    let lowered = ComputedPropertiesPass::new(options.transform).run(program);
    tracing::debug!(
        lowered = lowered.lowered_literals,
        emit_helpers = options.emit_helpers,
        "compiled program"
    );
    lowered.print(options.emit_helpers)
}

fn write_output(out: Option<PathBuf>, output: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(&path, output)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write output to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

/// Every getter and setter in the program must have a function expression
/// as its value.
pub fn validate_accessors(program: &[IRNode]) -> Result<()> {
    program.iter().try_for_each(check_node)
}

fn check_node(node: &IRNode) -> Result<()> {
    match node {
        IRNode::ObjectLiteral { properties } => {
            for prop in properties {
                if let IRPropertyKey::Computed(key) = &prop.key {
                    check_node(key)?;
                }
                if prop.is_accessor() && !matches!(prop.value, IRNode::FunctionExpr { .. }) {
                    bail!(
                        "accessor {} must have a function expression value",
                        describe_key(&prop.key)
                    );
                }
                check_node(&prop.value)?;
            }
            Ok(())
        }
        IRNode::BinaryExpr { left, right, .. } | IRNode::LogicalOr { left, right } => {
            check_node(left)?;
            check_node(right)
        }
        IRNode::CallExpr { callee, arguments } => {
            check_node(callee)?;
            arguments.iter().try_for_each(check_node)
        }
        IRNode::ElementAccess { object, index } => {
            check_node(object)?;
            check_node(index)
        }
        IRNode::PropertyAccess { object, .. }
        | IRNode::Parenthesized(object)
        | IRNode::ExpressionStatement(object) => check_node(object),
        IRNode::VarDecl {
            initializer: Some(expr),
            ..
        }
        | IRNode::ReturnStatement(Some(expr)) => check_node(expr),
        IRNode::CommaExpr(nodes)
        | IRNode::ArrayLiteral(nodes)
        | IRNode::VarDeclList(nodes)
        | IRNode::Block(nodes)
        | IRNode::Sequence(nodes)
        | IRNode::FunctionExpr { body: nodes, .. }
        | IRNode::FunctionDecl { body: nodes, .. } => nodes.iter().try_for_each(check_node),
        IRNode::VarDecl {
            initializer: None, ..
        }
        | IRNode::ReturnStatement(None)
        | IRNode::NumericLiteral(_)
        | IRNode::StringLiteral(_)
        | IRNode::BooleanLiteral(_)
        | IRNode::NullLiteral
        | IRNode::Undefined
        | IRNode::Identifier(_)
        | IRNode::This
        | IRNode::Raw(_) => Ok(()),
    }
}

fn describe_key(key: &IRPropertyKey) -> String {
    match key {
        IRPropertyKey::Identifier(name) | IRPropertyKey::NumericLiteral(name) => {
            format!("`{name}`")
        }
        IRPropertyKey::StringLiteral(s) => format!("`\"{s}\"`"),
        IRPropertyKey::Computed(expr) => format!("`[{}]`", IRPrinter::emit_to_string(expr)),
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
