use crate::{utils::int, Index};

/// Resolves a `v`, `v/vt`, `v/vt/vn` or `v//vn` token.
///
/// Every component is converted from 1-based to 0-based by subtracting one.
/// A missing, empty or non-numeric component is read as `0`, so it ends up
/// as [`Index::UNUSED`]. Negative (relative) indices are not resolved
/// against the attribute counts: `-1` becomes `-2`.
#[must_use]
pub fn parse_index(token: &str) -> Index {
    let mut parts = token.split('/');
    let mut next = || parts.next().map_or(0, int::parse_or_zero);
    let position = next();
    let texcoord = next();
    let normal = next();
    Index {
        position: position.wrapping_sub(1),
        texcoord: texcoord.wrapping_sub(1),
        normal: normal.wrapping_sub(1),
    }
}

/// Resolves every vertex reference of a `f`/`l`/`p` line.
pub(super) fn parse_indices(tokens: &[&str]) -> Vec<Index> {
    tokens.iter().map(|t| parse_index(t)).collect()
}
