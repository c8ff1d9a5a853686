//! Argument codec
//!
//! Turns one trimmed text token into one `ArgValue` of the requested type.
//! A decode either fully succeeds or fails; there are no default fallbacks.

use crate::{ArgValue, ShellError, Signature, TypeTag};
use std::str::FromStr;

/// Decode `token` under the rule for `tag`.
///
/// Numbers are plain decimal literals without grouping. `char` takes the
/// first character of the token and ignores the rest. `str` is verbatim.
pub fn decode(token: &str, tag: TypeTag) -> Result<ArgValue, ShellError> {
    match tag {
        TypeTag::U8 => parse_number(token, tag).map(ArgValue::U8),
        TypeTag::I8 => parse_number(token, tag).map(ArgValue::I8),
        TypeTag::I32 => parse_number(token, tag).map(ArgValue::I32),
        TypeTag::U32 => parse_number(token, tag).map(ArgValue::U32),
        TypeTag::F32 => parse_decimal(token, tag).map(ArgValue::F32),
        TypeTag::F64 => parse_decimal(token, tag).map(ArgValue::F64),
        TypeTag::Char => token
            .chars()
            .next()
            .map(ArgValue::Char)
            .ok_or_else(|| ShellError::invalid_literal(token, tag)),
        TypeTag::Text => Ok(ArgValue::Text(token.to_string())),
        TypeTag::Unknown => Err(ShellError::UnsupportedType { tag }),
    }
}

/// Decode every token against the matching signature entry, left to right.
///
/// The token count must equal the signature length, otherwise nothing is
/// decoded. Stops at the first failing token.
pub fn decode_all<'a, I>(tokens: I, signature: &Signature) -> Result<Vec<ArgValue>, ShellError>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = tokens.into_iter().collect();
    if tokens.len() != signature.len() {
        return Err(ShellError::ArgumentCount {
            expected: signature.clone(),
            received: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .zip(signature.tags())
        .map(|(token, tag)| decode(token, *tag))
        .collect()
}

fn parse_number<T: FromStr>(token: &str, tag: TypeTag) -> Result<T, ShellError> {
    token.parse::<T>().map_err(|_| ShellError::invalid_literal(token, tag))
}

/// Floats accept only `[+-]digits[.digits]`; `FromStr` alone would let
/// `nan`, `inf` and exponents through.
fn parse_decimal<T: FromStr>(token: &str, tag: TypeTag) -> Result<T, ShellError> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int.len() + frac.len() == 0 || !digits_only(int) || !digits_only(frac) {
        return Err(ShellError::invalid_literal(token, tag));
    }
    parse_number(token, tag)
}
