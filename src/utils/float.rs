use fast_float::FastFloat;

/// Parses a whole token as a float.
///
/// The grammar is locale-independent (`.` is the only decimal separator).
/// Returns `None` if the token is not entirely a number.
#[inline]
pub(crate) fn parse<T: FastFloat>(token: &str) -> Option<T> {
    fast_float::parse(token).ok()
}

/// Overwrites `dst` with the parsed value of `token`, if any.
#[inline]
pub(crate) fn parse_into<T: FastFloat>(token: Option<&&str>, dst: &mut T) -> bool {
    match token.and_then(|t| parse(t)) {
        Some(v) => {
            *dst = v;
            true
        }
        None => false,
    }
}

/// Parses up to three tokens into the components of `dst`.
///
/// Components whose token is missing or not a number keep their value.
pub(crate) fn parse_vec3(tokens: &[&str], dst: &mut [f32; 3]) {
    for (token, dst) in tokens.iter().zip(dst.iter_mut()) {
        if let Some(v) = parse(token) {
            *dst = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;
