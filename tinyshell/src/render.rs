//! Outcome renderer
//!
//! Turns a dispatch result into the text returned to the caller. "Not found"
//! failures carry the relevant listing so the caller can correct the line.

use crate::{Executed, ParsedCommand};
use tinyshell_core::ShellError;
use tinyshell_registry::ModuleRegistry;

pub fn success(executed: &Executed) -> String {
    format!(
        "command '{}' executed successfully in module '{}'",
        executed.command, executed.module
    )
}

pub fn failure(err: &ShellError, cmd: &ParsedCommand<'_>, modules: &ModuleRegistry) -> String {
    match err {
        ShellError::ModuleNotFound { .. } => format!("{}\n\n{}", err, modules.describe_all()),
        ShellError::FunctionNotFound { module, .. } => {
            format!("{}\n\n{}", err, modules.describe_module(module))
        }
        ShellError::UnsupportedType { .. } => format!(
            "{}\nCommand '{}' in module '{}' cannot be called until it is registered with supported types.",
            err, cmd.command_name, cmd.module_name
        ),
        ShellError::ExecutionFault { status, .. } => format!(
            "{} (command '{}' in module '{}', status {})",
            err, cmd.command_name, cmd.module_name, status
        ),
        _ => err.to_string(),
    }
}

pub fn outcome(result: &Result<Executed, ShellError>, cmd: &ParsedCommand<'_>, modules: &ModuleRegistry) -> String {
    match result {
        Ok(executed) => success(executed),
        Err(err) => failure(err, cmd, modules),
    }
}
