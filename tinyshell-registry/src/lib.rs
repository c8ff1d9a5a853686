//! TinyShell Registry
//!
//! Provides the type-erased function table:
//! - `TypedFunction` (one callable plus its signature)
//! - `FunctionRegistry` (the functions of one module)
//! - `ModuleRegistry` (named modules, the process-wide root)

mod function;
mod modules;
mod registry;
mod slots;

pub use function::{Handler, IntoTypedFn, TypedFunction};
pub use modules::{Module, ModuleRegistry, RegistryLimits, MODULE_NOT_FOUND, NO_MODULES};
pub use registry::{FunctionRegistry, NO_FUNCTIONS};
pub use slots::SlotTable;

/// Re-export core types for hosts registering functions
pub mod prelude {
    pub use crate::{FunctionRegistry, IntoTypedFn, ModuleRegistry, RegistryLimits, TypedFunction};
    pub use tinyshell_core::prelude::*;
}
