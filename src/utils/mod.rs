pub(crate) mod bytes;
pub(crate) mod float;
pub(crate) mod int;

/// Splits a line into whitespace-separated tokens.
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Returns the text after the leading `key` token, trimmed.
///
/// `line` must start with `key` (after optional leading whitespace);
/// otherwise an empty string is returned.
pub(crate) fn rest_of_line<'a>(line: &'a str, key: &str) -> &'a str {
    line.trim_start().strip_prefix(key).map_or("", str::trim)
}

pub(crate) mod utf16 {
    use std::borrow::Cow;

    use crate::error::{Error, Result};

    const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 00, 00];
    const UTF32BE_BOM: &[u8] = &[00, 00, 0xFE, 0xFF];
    const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];
    const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
    const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

    /// Converts bytes to a string. Converts to UTF-8 if bytes are UTF-16 and have BOM.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub(crate) fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>> {
        if bytes.starts_with(UTF8_BOM) {
            Ok(String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]))
        } else if bytes.starts_with(UTF32BE_BOM) || bytes.starts_with(UTF32LE_BOM) {
            Err(Error::UnsupportedEncoding("utf-32"))
        } else if bytes.starts_with(UTF16BE_BOM) {
            from_utf16(&bytes[UTF16BE_BOM.len()..], u16::from_be_bytes).map(Into::into)
        } else if bytes.starts_with(UTF16LE_BOM) {
            from_utf16(&bytes[UTF16LE_BOM.len()..], u16::from_le_bytes).map(Into::into)
        } else {
            Ok(String::from_utf8_lossy(bytes))
        }
    }

    #[cold]
    #[inline(never)]
    fn from_utf16(bytes: &[u8], f: fn([u8; 2]) -> u16) -> Result<String> {
        if bytes.len() % 2 != 0 {
            return Err(Error::InvalidUtf16);
        }
        char::decode_utf16(bytes.chunks_exact(2).map(|b| f([b[0], b[1]])))
            .collect::<Result<String, _>>()
            .map_err(|_| Error::InvalidUtf16)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
        assert_eq!(tokenize("  f 1/2/3\t4//5   6 "), ["f", "1/2/3", "4//5", "6"]);
    }

    #[test]
    fn rest() {
        assert_eq!(rest_of_line("newmtl  my material  ", "newmtl"), "my material");
        assert_eq!(rest_of_line("  o", "o"), "");
        assert_eq!(rest_of_line("map_Kd -clamp on a.png", "map_Kd"), "-clamp on a.png");
        assert_eq!(rest_of_line("g a", "o"), "");
    }
}
