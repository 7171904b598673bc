use std::{fmt, fmt::Write as _, io, path::PathBuf};

/// Errors that prevent a file from being decoded at all.
///
/// Problems inside the text (unknown material, degenerate face, ...) are
/// never reported through this type; see [`Diagnostics`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0} is not supported")]
    UnsupportedEncoding(&'static str),
    #[error("invalid utf-16: lone surrogate found")]
    InvalidUtf16,
    #[error("unsupported or unrecognized file type {0:?}")]
    UnsupportedFileType(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Warning and error text accumulated while decoding.
///
/// Both accumulators are append-only, newline-separated messages. Warnings
/// are anomalies the decoder recovered from; errors mean part of the input
/// (typically a material library) could not be used at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Diagnostics {
    warnings: String,
    errors: String,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn warnings(&self) -> &str {
        &self.warnings
    }

    #[must_use]
    pub fn errors(&self) -> &str {
        &self.errors
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records a warning for the given 1-based line.
    pub fn warn(&mut self, line: usize, msg: impl fmt::Display) {
        tracing::trace!(line, "{msg}");
        push_line(&mut self.warnings, line, &msg);
    }

    /// Records an error for the given 1-based line.
    pub fn error(&mut self, line: usize, msg: impl fmt::Display) {
        tracing::trace!(line, "{msg}");
        push_line(&mut self.errors, line, &msg);
    }

    /// Moves all messages of `other` to the end of `self`, prefixing each
    /// one with `source` if given.
    pub fn append(&mut self, other: Self, source: Option<&str>) {
        match source {
            None => {
                self.warnings.push_str(&other.warnings);
                self.errors.push_str(&other.errors);
            }
            Some(source) => {
                for msg in other.warnings.lines() {
                    let _ = writeln!(self.warnings, "{source}: {msg}");
                }
                for msg in other.errors.lines() {
                    let _ = writeln!(self.errors, "{source}: {msg}");
                }
            }
        }
    }
}

fn push_line(buf: &mut String, line: usize, msg: &dyn fmt::Display) {
    let _ = writeln!(buf, "line {line}: {msg}");
}
