//! Argument type tags and function signatures
//!
//! A signature is the ordered list of type tags a function declares. It is
//! computed once at registration and rendered in listings as `(u8, u8)`.

use std::fmt;

/// Compact identifier for one supported primitive argument type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    U8,
    I8,
    I32,
    U32,
    F32,
    F64,
    Char,
    Text,
    /// A symbol outside the supported set. Decoding against it always fails.
    Unknown,
}

impl TypeTag {
    /// Every tag the codec can decode
    pub const SUPPORTED: [TypeTag; 8] = [
        TypeTag::U8,
        TypeTag::I8,
        TypeTag::I32,
        TypeTag::U32,
        TypeTag::F32,
        TypeTag::F64,
        TypeTag::Char,
        TypeTag::Text,
    ];

    /// Symbol used in listings and expected-type messages
    pub fn symbol(&self) -> &'static str {
        match self {
            TypeTag::U8 => "u8",
            TypeTag::I8 => "i8",
            TypeTag::I32 => "i32",
            TypeTag::U32 => "u32",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::Char => "char",
            TypeTag::Text => "str",
            TypeTag::Unknown => "?",
        }
    }

    /// Parse a listing symbol. Unrecognized symbols become `Unknown`.
    pub fn from_symbol(symbol: &str) -> Self {
        TypeTag::SUPPORTED
            .iter()
            .copied()
            .find(|tag| tag.symbol() == symbol)
            .unwrap_or(TypeTag::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, TypeTag::Unknown)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Ordered parameter types of one function
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(Vec<TypeTag>);

impl Signature {
    pub fn new(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse a listing such as `(u8, f32)` or `u8, f32`.
    ///
    /// Symbols are trimmed. Unrecognized symbols are kept as `Unknown` so the
    /// arity is always the number of comma-separated entries.
    pub fn parse(text: &str) -> Self {
        let inner = text.trim();
        let inner = inner.strip_prefix('(').unwrap_or(inner);
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        if inner.trim().is_empty() {
            return Self::empty();
        }
        Self(inner.split(',').map(|s| TypeTag::from_symbol(s.trim())).collect())
    }

    pub fn tags(&self) -> &[TypeTag] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First tag the codec cannot decode, if any
    pub fn first_unsupported(&self) -> Option<TypeTag> {
        self.0.iter().copied().find(|t| !t.is_supported())
    }
}

impl From<Vec<TypeTag>> for Signature {
    fn from(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.symbol())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for tag in TypeTag::SUPPORTED {
            assert_eq!(TypeTag::from_symbol(tag.symbol()), tag);
        }
        assert_eq!(TypeTag::from_symbol("u16"), TypeTag::Unknown);
    }

    #[test]
    fn test_signature_display() {
        let sig = Signature::new(vec![TypeTag::U8, TypeTag::F32, TypeTag::Text]);
        assert_eq!(sig.to_string(), "(u8, f32, str)");
        assert_eq!(Signature::empty().to_string(), "()");
    }

    #[test]
    fn test_listed_symbol_count_equals_arity() {
        let sigs = [
            Signature::empty(),
            Signature::new(vec![TypeTag::Char]),
            Signature::new(vec![TypeTag::U8, TypeTag::I8, TypeTag::I32, TypeTag::U32]),
            Signature::new(TypeTag::SUPPORTED.to_vec()),
        ];
        for sig in sigs {
            let listed = sig.to_string();
            assert_eq!(Signature::parse(&listed).len(), sig.len(), "listing: {}", listed);
            assert_eq!(Signature::parse(&listed), sig);
        }
    }

    #[test]
    fn test_parse_keeps_unknown_entries() {
        let sig = Signature::parse("u8, bogus");
        assert_eq!(sig.len(), 2);
        assert_eq!(sig.first_unsupported(), Some(TypeTag::Unknown));
    }
}
