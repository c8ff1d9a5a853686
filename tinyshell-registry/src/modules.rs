//! Module Registry
//!
//! The process-wide root: an ordered table of modules, each owning one
//! `FunctionRegistry`. Populated during startup, read-mostly afterwards.

use crate::{FunctionRegistry, IntoTypedFn, SlotTable};
use tinyshell_core::prelude::*;
use tinyshell_core::validate_module_name;
use tracing::{debug, warn};

/// Listing returned when no modules are registered
pub const NO_MODULES: &str = "no modules available.\n";

/// Text returned by `describe_module` for an unknown module
pub const MODULE_NOT_FOUND: &str = "module not found.\n";

/// Upper bounds on registry growth; `None` means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryLimits {
    pub max_modules: Option<usize>,
    pub max_functions_per_module: Option<usize>,
}

/// A named group of functions
#[derive(Debug)]
pub struct Module {
    name: String,
    description: String,
    functions: FunctionRegistry,
}

impl Module {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn functions_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }

    /// Header line followed by the function listing
    pub fn describe(&self) -> String {
        format!("{}: {}\n{}", self.name, self.description, self.functions.describe_all())
    }
}

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    slots: SlotTable<Module>,
    limits: RegistryLimits,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: RegistryLimits) -> Self {
        Self {
            slots: SlotTable::with_limit(limits.max_modules),
            limits,
        }
    }

    /// Add an empty module. Existing names are rejected.
    pub fn create_module(&mut self, name: &str, description: &str) -> Result<usize, ShellError> {
        validate_module_name(name)?;
        if self.contains(name) {
            warn!(module = name, "duplicate module rejected");
            return Err(ShellError::ModuleAlreadyExists { module: name.to_string() });
        }
        let module = Module {
            name: name.to_string(),
            description: description.to_string(),
            functions: FunctionRegistry::with_limit(name, self.limits.max_functions_per_module),
        };
        let index = self.slots.insert(module)?;
        debug!(module = name, index, "created module");
        Ok(index)
    }

    /// Register `func` as `func_name` inside `module_name`
    pub fn register_function<F, Args>(
        &mut self,
        module_name: &str,
        func: F,
        func_name: &str,
        description: &str,
    ) -> Result<usize, ShellError>
    where
        F: IntoTypedFn<Args>,
    {
        self.module_mut(module_name)?
            .functions_mut()
            .register(func, func_name, description)
    }

    /// Register a slice-reading callable with an explicit signature
    pub fn register_raw_function<H>(
        &mut self,
        module_name: &str,
        func_name: &str,
        description: &str,
        signature: Signature,
        handler: H,
    ) -> Result<usize, ShellError>
    where
        H: Fn(&[ArgValue]) -> Status + Send + Sync + 'static,
    {
        self.module_mut(module_name)?
            .functions_mut()
            .register_raw(func_name, description, signature, handler)
    }

    /// Slot index of the module named `name`
    pub fn select_module(&self, name: &str) -> Result<usize, ShellError> {
        self.slots
            .position(|m| m.name == name)
            .ok_or_else(|| ShellError::module_not_found(name))
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.select_module(name).ok().and_then(|i| self.slots.get(i))
    }

    pub fn module_mut(&mut self, name: &str) -> Result<&mut Module, ShellError> {
        let index = self.select_module(name)?;
        self.slots
            .get_mut(index)
            .ok_or_else(|| ShellError::module_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.select_module(name).is_ok()
    }

    pub fn has_function(&self, module_name: &str, func_name: &str) -> bool {
        self.module(module_name)
            .is_some_and(|m| m.functions.contains(func_name))
    }

    pub fn call(&self, module_name: &str, func_name: &str, args: &[ArgValue]) -> Result<Status, ShellError> {
        self.module(module_name)
            .ok_or_else(|| ShellError::module_not_found(module_name))?
            .functions
            .invoke_by_name(func_name, args)
    }

    pub fn signature_of(&self, module_name: &str, func_name: &str) -> Option<&Signature> {
        self.module(module_name)?.functions.signature_of(func_name)
    }

    /// One line per module: `name => description`
    pub fn describe_all(&self) -> String {
        if self.slots.is_empty() {
            return NO_MODULES.to_string();
        }
        let mut text = String::new();
        for (_, m) in self.slots.iter() {
            text.push_str(&format!("{} => {}\n", m.name, m.description));
        }
        text
    }

    pub fn describe_module(&self, name: &str) -> String {
        self.module(name)
            .map(Module::describe)
            .unwrap_or_else(|| MODULE_NOT_FOUND.to_string())
    }

    /// Grow to `new_size` slots or truncate, dropping trailing modules
    pub fn resize(&mut self, new_size: usize) -> Result<(), ShellError> {
        self.slots.resize(new_size)?;
        debug!(slots = new_size, "resized module registry");
        Ok(())
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.slots.iter().map(|(_, m)| m)
    }
}
