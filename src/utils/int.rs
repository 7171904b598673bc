use std::str::FromStr;

/// Decimal integers accepted in OBJ/MTL tokens.
pub(crate) trait Integer: FromStr + Copy {}

impl Integer for i32 {}
impl Integer for u32 {}

/// Parses a whole token as a decimal integer with an optional sign.
#[inline]
pub(crate) fn parse<T: Integer>(token: &str) -> Option<T> {
    token.parse().ok()
}

/// Parses `token`, falling back to `0` on failure.
#[inline]
pub(crate) fn parse_or_zero(token: &str) -> i32 {
    parse(token).unwrap_or(0)
}

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;
