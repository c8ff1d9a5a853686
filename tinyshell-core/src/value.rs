//! Decoded argument values
//!
//! `ArgValue` is the closed set of values a command can receive. Each variant
//! corresponds to exactly one `TypeTag`, which is what lets a registry hold
//! functions of different signatures behind one call shape.

use crate::TypeTag;
use std::fmt;

/// One decoded argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    U8(u8),
    I8(i8),
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    Char(char),
    Text(String),
}

impl ArgValue {
    /// Tag describing this value's type
    pub fn tag(&self) -> TypeTag {
        match self {
            ArgValue::U8(_) => TypeTag::U8,
            ArgValue::I8(_) => TypeTag::I8,
            ArgValue::I32(_) => TypeTag::I32,
            ArgValue::U32(_) => TypeTag::U32,
            ArgValue::F32(_) => TypeTag::F32,
            ArgValue::F64(_) => TypeTag::F64,
            ArgValue::Char(_) => TypeTag::Char,
            ArgValue::Text(_) => TypeTag::Text,
        }
    }

    // ========== Safe Accessors (never panic) ==========

    pub fn as_u8(&self) -> Option<u8> {
        match self {
            ArgValue::U8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            ArgValue::I8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ArgValue::I32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            ArgValue::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            ArgValue::F32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            ArgValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::U8(v) => write!(f, "{}", v),
            ArgValue::I8(v) => write!(f, "{}", v),
            ArgValue::I32(v) => write!(f, "{}", v),
            ArgValue::U32(v) => write!(f, "{}", v),
            ArgValue::F32(v) => write!(f, "{}", v),
            ArgValue::F64(v) => write!(f, "{}", v),
            ArgValue::Char(c) => write!(f, "{}", c),
            ArgValue::Text(s) => f.write_str(s),
        }
    }
}

/// A Rust parameter type that can be produced from an `ArgValue`.
///
/// Implemented for every supported primitive. The associated tag is what a
/// registry records as the parameter's signature entry.
pub trait FromArg: Sized {
    const TAG: TypeTag;

    /// Extract the value, or `None` when the variant does not match `TAG`.
    fn from_arg(value: &ArgValue) -> Option<Self>;
}

macro_rules! impl_from_arg {
    ($ty:ty, $tag:ident, $accessor:ident) => {
        impl FromArg for $ty {
            const TAG: TypeTag = TypeTag::$tag;

            fn from_arg(value: &ArgValue) -> Option<Self> {
                value.$accessor()
            }
        }

        impl From<$ty> for ArgValue {
            fn from(v: $ty) -> Self {
                ArgValue::$tag(v)
            }
        }
    };
}

impl_from_arg!(u8, U8, as_u8);
impl_from_arg!(i8, I8, as_i8);
impl_from_arg!(i32, I32, as_i32);
impl_from_arg!(u32, U32, as_u32);
impl_from_arg!(f32, F32, as_f32);
impl_from_arg!(f64, F64, as_f64);
impl_from_arg!(char, Char, as_char);

impl FromArg for String {
    const TAG: TypeTag = TypeTag::Text;

    fn from_arg(value: &ArgValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Text(s)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}
