//! TinyShell - text command dispatcher
//!
//! Routes lines of the form `module -command arg0, arg1, ..., argN` to
//! functions registered under named modules, decoding each argument to the
//! parameter type the function declared.
//!
//! ```
//! use tinyshell::TinyShell;
//! use tinyshell::prelude::*;
//!
//! fn set(_pin: u8, _value: u8) -> Status {
//!     status::OK
//! }
//!
//! let mut shell = TinyShell::new();
//! shell.create_module("gpio", "pin control").unwrap();
//! shell.add("gpio", set, "set", "drive a pin").unwrap();
//! assert_eq!(
//!     shell.run_line_command("gpio -set 3, 1"),
//!     "command 'set' executed successfully in module 'gpio'"
//! );
//! ```

mod config;
mod parser;
pub mod render;

pub use config::{ShellConfig, DEFAULT_PROMPT, ENV_MAX_FUNCTIONS, ENV_MAX_MODULES, ENV_PROMPT};
pub use parser::ParsedCommand;

use tinyshell_core::codec;
use tinyshell_core::prelude::*;
use tinyshell_registry::{IntoTypedFn, ModuleRegistry};
use tracing::debug;

/// Re-export registration types for hosts
pub mod prelude {
    pub use crate::{Executed, ShellConfig, TinyShell};
    pub use tinyshell_registry::prelude::*;
}

/// A command that ran and returned `status::OK`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub module: String,
    pub command: String,
}

/// Main dispatcher
#[derive(Debug)]
pub struct TinyShell {
    modules: ModuleRegistry,
    config: ShellConfig,
}

impl TinyShell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            modules: ModuleRegistry::with_limits(config.limits),
            config,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    pub fn modules_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.modules
    }

    pub fn create_module(&mut self, name: &str, description: &str) -> Result<usize, ShellError> {
        self.modules.create_module(name, description)
    }

    /// Register `func` as command `name` of `module`
    pub fn add<F, Args>(&mut self, module: &str, func: F, name: &str, description: &str) -> Result<usize, ShellError>
    where
        F: IntoTypedFn<Args>,
    {
        self.modules.register_function(module, func, name, description)
    }

    /// Register a slice-reading callable with an explicit signature
    pub fn add_raw<H>(
        &mut self,
        module: &str,
        name: &str,
        description: &str,
        signature: Signature,
        handler: H,
    ) -> Result<usize, ShellError>
    where
        H: Fn(&[ArgValue]) -> Status + Send + Sync + 'static,
    {
        self.modules.register_raw_function(module, name, description, signature, handler)
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn has_function(&self, module: &str, function: &str) -> bool {
        self.modules.has_function(module, function)
    }

    /// Module listing for an empty name, otherwise that module's function listing
    pub fn get_help(&self, module_name: &str) -> String {
        if module_name.is_empty() {
            self.modules.describe_all()
        } else {
            self.modules.describe_module(module_name)
        }
    }

    /// Expected-argument text for one command, or why it cannot be given
    pub fn expected_types(&self, module: &str, function: &str) -> String {
        let Some(m) = self.modules.module(module) else {
            return ShellError::module_not_found(module).to_string();
        };
        match m.functions().signature_of(function) {
            Some(signature) => ShellError::ArityMismatch {
                module: module.to_string(),
                function: function.to_string(),
                expected: signature.clone(),
                received: 0,
            }
            .to_string(),
            None => ShellError::function_not_found(module, function).to_string(),
        }
    }

    /// Parse, validate, decode and invoke one line.
    ///
    /// Nothing is invoked unless every check and every decode succeeds.
    pub fn execute(&self, line: &str) -> Result<Executed, ShellError> {
        self.execute_parsed(&ParsedCommand::parse(line))
    }

    /// Same as `execute`, rendered as text. Never fails.
    pub fn run_line_command(&self, line: &str) -> String {
        let cmd = ParsedCommand::parse(line);
        let result = self.execute_parsed(&cmd);
        render::outcome(&result, &cmd, &self.modules)
    }

    fn execute_parsed(&self, cmd: &ParsedCommand<'_>) -> Result<Executed, ShellError> {
        debug!(
            module = cmd.module_name,
            command = cmd.command_name,
            args = cmd.args_count,
            "dispatching command"
        );

        let module = self
            .modules
            .module(cmd.module_name)
            .ok_or_else(|| ShellError::module_not_found(cmd.module_name))?;

        let functions = module.functions();
        let function = functions
            .get(cmd.command_name)
            .ok_or_else(|| ShellError::function_not_found(cmd.module_name, cmd.command_name))?;

        if !functions.check_arity(cmd.command_name, cmd.args_count) {
            return Err(ShellError::ArityMismatch {
                module: cmd.module_name.to_string(),
                function: cmd.command_name.to_string(),
                expected: function.signature().clone(),
                received: cmd.args_count,
            });
        }

        let args = codec::decode_all(cmd.args(), function.signature())?;
        let code = function.try_invoke(&args)?;
        debug!(module = cmd.module_name, command = cmd.command_name, status = code, "command returned");

        if code != status::OK {
            return Err(ShellError::NonZeroStatus {
                module: cmd.module_name.to_string(),
                function: cmd.command_name.to_string(),
                status: code,
            });
        }
        Ok(Executed {
            module: cmd.module_name.to_string(),
            command: cmd.command_name.to_string(),
        })
    }
}

impl Default for TinyShell {
    fn default() -> Self {
        Self::new()
    }
}
