//! Function Registry
//!
//! Holds the functions of one module. Lookups are linear scans with exact,
//! case-sensitive name matching; modules hold tens of functions, not
//! thousands.

use crate::{IntoTypedFn, SlotTable, TypedFunction};
use tinyshell_core::prelude::*;
use tinyshell_core::validate_name;
use tracing::{debug, warn};

/// Listing returned when a module has no functions
pub const NO_FUNCTIONS: &str = "no functions available.\n";

#[derive(Debug)]
pub struct FunctionRegistry {
    module: String,
    slots: SlotTable<TypedFunction>,
}

impl FunctionRegistry {
    /// Registry for the module named `module`, used in error messages
    pub fn new(module: impl Into<String>) -> Self {
        Self::with_limit(module, None)
    }

    pub fn with_limit(module: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            module: module.into(),
            slots: SlotTable::with_limit(limit),
        }
    }

    /// Register `func` under `name`; its signature comes from its parameter types
    pub fn register<F, Args>(&mut self, func: F, name: &str, description: &str) -> Result<usize, ShellError>
    where
        F: IntoTypedFn<Args>,
    {
        self.insert(TypedFunction::new(name, description, func))
    }

    /// Register a slice-reading callable with an explicit signature
    pub fn register_raw<H>(
        &mut self,
        name: &str,
        description: &str,
        signature: Signature,
        handler: H,
    ) -> Result<usize, ShellError>
    where
        H: Fn(&[ArgValue]) -> Status + Send + Sync + 'static,
    {
        self.insert(TypedFunction::from_raw(name, description, signature, handler))
    }

    /// Store an already built function.
    ///
    /// Duplicate names are rejected and leave the registry unchanged.
    pub fn insert(&mut self, function: TypedFunction) -> Result<usize, ShellError> {
        validate_name(function.name())?;
        if self.contains(function.name()) {
            warn!(module = %self.module, function = function.name(), "duplicate function rejected");
            return Err(ShellError::FunctionAlreadyExists {
                module: self.module.clone(),
                function: function.name().to_string(),
            });
        }
        if let Some(tag) = function.signature().first_unsupported() {
            warn!(
                module = %self.module,
                function = function.name(),
                %tag,
                "signature contains an unsupported type; calls will fail to decode"
            );
        }

        let name = function.name().to_string();
        let signature = function.signature().to_string();
        let index = self.slots.insert(function)?;
        debug!(module = %self.module, function = %name, %signature, index, "registered function");
        Ok(index)
    }

    /// Slot index of the first function named `name`
    pub fn lookup_by_name(&self, name: &str) -> Result<usize, ShellError> {
        self.slots
            .position(|f| f.name() == name)
            .ok_or_else(|| ShellError::function_not_found(&self.module, name))
    }

    pub fn get(&self, name: &str) -> Option<&TypedFunction> {
        self.lookup_by_name(name).ok().and_then(|i| self.slots.get(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup_by_name(name).is_ok()
    }

    pub fn invoke_by_name(&self, name: &str, args: &[ArgValue]) -> Result<Status, ShellError> {
        self.get(name)
            .map(|f| f.invoke(args))
            .ok_or_else(|| ShellError::function_not_found(&self.module, name))
    }

    /// True when `name` exists and declares exactly `received` parameters
    pub fn check_arity(&self, name: &str, received: usize) -> bool {
        self.get(name).is_some_and(|f| f.arity() == received)
    }

    pub fn signature_of(&self, name: &str) -> Option<&Signature> {
        self.get(name).map(TypedFunction::signature)
    }

    /// One line per function: `name (t0, t1) => description`
    pub fn describe_all(&self) -> String {
        if self.slots.is_empty() {
            return NO_FUNCTIONS.to_string();
        }
        let mut text = String::new();
        for (_, f) in self.slots.iter() {
            text.push_str(&format!("{} {} => {}\n", f.name(), f.signature(), f.description()));
        }
        text
    }

    /// Grow to `new_size` slots or truncate, dropping trailing functions
    pub fn resize(&mut self, new_size: usize) -> Result<(), ShellError> {
        self.slots.resize(new_size)?;
        debug!(module = %self.module, slots = new_size, "resized function registry");
        Ok(())
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.slot_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypedFunction> {
        self.slots.iter().map(|(_, f)| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn set_pin(_pin: u8, _value: u8) -> Status {
        status::OK
    }

    fn read_pin(pin: u8) -> Status {
        pin
    }

    fn gpio() -> FunctionRegistry {
        let mut reg = FunctionRegistry::new("gpio");
        reg.register(set_pin, "set", "drive a pin").unwrap();
        reg.register(read_pin, "read", "read a pin").unwrap();
        reg
    }

    #[test]
    fn test_register_appends() {
        let reg = gpio();
        assert_eq!(reg.lookup_by_name("set").unwrap(), 0);
        assert_eq!(reg.lookup_by_name("read").unwrap(), 1);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.slot_count(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let reg = gpio();
        assert!(reg.contains("set"));
        assert!(!reg.contains("Set"));
        assert_eq!(
            reg.lookup_by_name("SET"),
            Err(ShellError::function_not_found("gpio", "SET"))
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut reg = gpio();
        let err = reg.register(read_pin, "set", "shadow").unwrap_err();
        assert_eq!(
            err,
            ShellError::FunctionAlreadyExists { module: "gpio".into(), function: "set".into() }
        );
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.signature_of("set").unwrap().len(), 2);
        assert_eq!(reg.get("set").unwrap().description(), "drive a pin");
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let mut reg = FunctionRegistry::new("gpio");
        assert!(matches!(reg.register(read_pin, "", "x"), Err(ShellError::InvalidName { .. })));
        assert!(matches!(reg.register(read_pin, "a b", "x"), Err(ShellError::InvalidName { .. })));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_invoke_by_name() {
        let reg = gpio();
        assert_eq!(reg.invoke_by_name("read", &[ArgValue::U8(12)]), Ok(12));
        assert_eq!(
            reg.invoke_by_name("blink", &[]),
            Err(ShellError::function_not_found("gpio", "blink"))
        );
    }

    #[test]
    fn test_check_arity() {
        let reg = gpio();
        assert!(reg.check_arity("set", 2));
        assert!(!reg.check_arity("set", 1));
        assert!(!reg.check_arity("set", 3));
        assert!(!reg.check_arity("blink", 0));
    }

    #[test]
    fn test_describe_all() {
        assert_eq!(FunctionRegistry::new("empty").describe_all(), NO_FUNCTIONS);
        assert_eq!(
            gpio().describe_all(),
            "set (u8, u8) => drive a pin\nread (u8) => read a pin\n"
        );
    }

    #[test]
    fn test_resize_preserves_order_and_truncates() {
        let mut reg = gpio();
        reg.resize(4).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.slot_count(), 4);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let index = reg
            .register(
                move || -> Status {
                    counter.fetch_add(1, Ordering::SeqCst);
                    status::OK
                },
                "tick",
                "count calls",
            )
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(reg.invoke_by_name("tick", &[]), Ok(status::OK));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        reg.resize(1).unwrap();
        let names: Vec<_> = reg.iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["set"]);
        assert!(!reg.contains("tick"));
    }

    #[test]
    fn test_limit_reports_capacity_error() {
        let mut reg = FunctionRegistry::with_limit("gpio", Some(1));
        reg.register(read_pin, "read", "").unwrap();
        assert_eq!(
            reg.register(set_pin, "set", ""),
            Err(ShellError::Capacity { len: 1 })
        );
    }

    #[test]
    fn test_listed_signature_matches_arity() {
        let reg = gpio();
        for f in reg.iter() {
            let listed = f.signature().to_string();
            assert_eq!(Signature::parse(&listed).len(), f.arity());
        }
    }
}
