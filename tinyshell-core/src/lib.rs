//! TinyShell Core - Fundamental types
//!
//! This crate provides the core types used throughout TinyShell:
//! - `TypeTag` / `Signature`: parameter type descriptions
//! - `ArgValue`: decoded argument values
//! - `ShellError`: registration and dispatch errors, with status codes
//! - `codec`: text token to `ArgValue` decoding

pub mod codec;
mod error;
mod tag;
mod value;

pub use error::{status, validate_module_name, validate_name, ShellError};
pub use status::Status;
pub use tag::{Signature, TypeTag};
pub use value::{ArgValue, FromArg};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::status::{self, Status};
    pub use crate::{ArgValue, FromArg, ShellError, Signature, TypeTag};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_value_tags_match_from_arg() {
            assert_eq!(ArgValue::from(3u8).tag(), <u8 as FromArg>::TAG);
            assert_eq!(ArgValue::from(-3i8).tag(), <i8 as FromArg>::TAG);
            assert_eq!(ArgValue::from(-3i32).tag(), <i32 as FromArg>::TAG);
            assert_eq!(ArgValue::from(3u32).tag(), <u32 as FromArg>::TAG);
            assert_eq!(ArgValue::from(1.5f32).tag(), <f32 as FromArg>::TAG);
            assert_eq!(ArgValue::from(1.5f64).tag(), <f64 as FromArg>::TAG);
            assert_eq!(ArgValue::from('c').tag(), <char as FromArg>::TAG);
            assert_eq!(ArgValue::from("on").tag(), <String as FromArg>::TAG);
        }

        #[test]
        fn test_from_arg_rejects_other_variants() {
            assert_eq!(u8::from_arg(&ArgValue::U8(9)), Some(9));
            assert_eq!(u8::from_arg(&ArgValue::I8(9)), None);
            assert_eq!(String::from_arg(&ArgValue::Text("x".into())), Some("x".to_string()));
            assert_eq!(String::from_arg(&ArgValue::Char('x')), None);
        }

        #[test]
        fn test_display() {
            assert_eq!(ArgValue::I32(-4).to_string(), "-4");
            assert_eq!(ArgValue::Text("hello world".into()).to_string(), "hello world");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_status_mapping() {
            assert_eq!(ShellError::module_not_found("gpio").status(), status::MODULE_NOT_FOUND);
            assert_eq!(ShellError::function_not_found("gpio", "set").status(), status::FUNCTION_NOT_FOUND);
            assert_eq!(ShellError::invalid_literal("x", TypeTag::U8).status(), status::ERROR);
            let err = ShellError::NonZeroStatus {
                module: "gpio".into(),
                function: "set".into(),
                status: 7,
            };
            assert_eq!(err.status(), 7);
        }

        #[test]
        fn test_messages() {
            assert_eq!(
                ShellError::module_not_found("unknown").to_string(),
                "module 'unknown' not found."
            );
            let err = ShellError::ArityMismatch {
                module: "gpio".into(),
                function: "set".into(),
                expected: Signature::new(vec![TypeTag::U8, TypeTag::U8]),
                received: 1,
            };
            assert_eq!(err.to_string(), "expected types for 'set' in module 'gpio': (u8, u8)");
        }

        #[test]
        fn test_name_validation() {
            assert!(validate_name("set").is_ok());
            assert!(validate_name("set-pin").is_ok());
            assert!(validate_name("").is_err());
            assert!(validate_name("two words").is_err());
            assert!(validate_module_name("gpio").is_ok());
            assert!(validate_module_name("my-mod").is_err());
        }
    }
}
