//! Shell errors and status codes
//!
//! Errors never unwind past the dispatcher. Each one carries enough context
//! to render a message the caller can act on, and maps to a status code for
//! hosts that only deal in numbers.

use crate::{Signature, TypeTag};
use thiserror::Error;

/// Status codes returned by registered functions and by the registries.
///
/// `OK` is the only success value. Codes not listed here are
/// application-specific and are reported verbatim.
pub mod status {
    pub type Status = u8;

    pub const OK: Status = 0;
    /// Function panicked with a message payload
    pub const EXECUTION_FAULT: Status = 202;
    /// Function panicked with a payload that carries no message
    pub const EXECUTION_FAULT_OPAQUE: Status = 203;
    pub const FUNCTION_NOT_FOUND: Status = 253;
    pub const MODULE_NOT_FOUND: Status = 254;
    pub const ERROR: Status = 255;
}

use status::Status;

/// Errors raised while registering or dispatching commands
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    #[error("module '{module}' not found.")]
    ModuleNotFound { module: String },

    #[error("command '{function}' not found in module '{module}'.")]
    FunctionNotFound { module: String, function: String },

    #[error("expected types for '{function}' in module '{module}': {expected}")]
    ArityMismatch {
        module: String,
        function: String,
        expected: Signature,
        received: usize,
    },

    #[error("error converting argument '{token}' to type '{tag}'.")]
    InvalidLiteral { token: String, tag: TypeTag },

    #[error("received {received} arguments for signature {expected}.")]
    ArgumentCount { expected: Signature, received: usize },

    #[error("unsupported argument type '{tag}' in signature.")]
    UnsupportedType { tag: TypeTag },

    #[error("function '{function}' faulted during execution: {message}")]
    ExecutionFault {
        function: String,
        message: String,
        status: Status,
    },

    #[error("error executing command '{function}' in module '{module}': {status}")]
    NonZeroStatus {
        module: String,
        function: String,
        status: Status,
    },

    #[error("registry capacity exhausted at {len} slots.")]
    Capacity { len: usize },

    #[error("module '{module}' already exists.")]
    ModuleAlreadyExists { module: String },

    #[error("function '{function}' already exists in module '{module}'.")]
    FunctionAlreadyExists { module: String, function: String },

    #[error("invalid name '{name}'.")]
    InvalidName { name: String },
}

impl ShellError {
    // ========== Common Error Constructors ==========

    pub fn module_not_found(module: &str) -> Self {
        Self::ModuleNotFound { module: module.to_string() }
    }

    pub fn function_not_found(module: &str, function: &str) -> Self {
        Self::FunctionNotFound {
            module: module.to_string(),
            function: function.to_string(),
        }
    }

    pub fn invalid_literal(token: &str, tag: TypeTag) -> Self {
        Self::InvalidLiteral { token: token.to_string(), tag }
    }

    pub fn invalid_name(name: &str) -> Self {
        Self::InvalidName { name: name.to_string() }
    }

    /// Status code a host sees for this error
    pub fn status(&self) -> Status {
        match self {
            ShellError::ModuleNotFound { .. } => status::MODULE_NOT_FOUND,
            ShellError::FunctionNotFound { .. } => status::FUNCTION_NOT_FOUND,
            ShellError::ExecutionFault { status, .. } => *status,
            ShellError::NonZeroStatus { status, .. } => *status,
            _ => status::ERROR,
        }
    }

    /// True for problems with the registered signatures rather than the input
    pub fn is_registry_defect(&self) -> bool {
        matches!(self, ShellError::UnsupportedType { .. })
    }
}

/// Names must be addressable by the command grammar
pub fn validate_name(name: &str) -> Result<(), ShellError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ShellError::invalid_name(name));
    }
    Ok(())
}

/// Module names additionally may not contain `-`, which starts the command token
pub fn validate_module_name(name: &str) -> Result<(), ShellError> {
    validate_name(name)?;
    if name.contains('-') {
        return Err(ShellError::invalid_name(name));
    }
    Ok(())
}
