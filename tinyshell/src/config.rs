//! Shell configuration
//!
//! Built with `with_*` methods, or read from the environment:
//! - `TINYSHELL_MAX_MODULES`: cap on registered modules
//! - `TINYSHELL_MAX_FUNCTIONS`: cap on functions per module
//! - `TINYSHELL_PROMPT`: prompt printed by interactive hosts

use tinyshell_registry::RegistryLimits;
use tracing::warn;

pub const ENV_MAX_MODULES: &str = "TINYSHELL_MAX_MODULES";
pub const ENV_MAX_FUNCTIONS: &str = "TINYSHELL_MAX_FUNCTIONS";
pub const ENV_PROMPT: &str = "TINYSHELL_PROMPT";

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub limits: RegistryLimits,
    pub prompt: String,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self {
            limits: RegistryLimits::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_max_modules(mut self, max: usize) -> Self {
        self.limits.max_modules = Some(max);
        self
    }

    pub fn with_max_functions(mut self, max: usize) -> Self {
        self.limits.max_functions_per_module = Some(max);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup. Unparsable limits are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        if let Some(max) = parse_limit(&lookup, ENV_MAX_MODULES) {
            config = config.with_max_modules(max);
        }
        if let Some(max) = parse_limit(&lookup, ENV_MAX_FUNCTIONS) {
            config = config.with_max_functions(max);
        }
        if let Some(prompt) = lookup(ENV_PROMPT) {
            config = config.with_prompt(prompt);
        }
        config
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_limit<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(max) => Some(max),
        Err(_) => {
            warn!(key, value = %raw, "ignoring malformed limit");
            None
        }
    }
}
