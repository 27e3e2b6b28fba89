//! Puzzle input sources.

use core::fmt;
use std::borrow::Cow;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::input::{IStr, IStrError, NL};

/// Puzzle input text together with the path it came from.
#[derive(Debug, Clone)]
pub struct Input {
    path: Cow<'static, str>,
    data: Cow<'static, str>,
}

impl Input {
    /// Construct input from text embedded in the binary.
    #[inline]
    pub const fn embedded(path: &'static str, data: &'static str) -> Self {
        Self {
            path: Cow::Borrowed(path),
            data: Cow::Borrowed(data),
        }
    }

    /// Read input from a file.
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| anyhow!("{}", path.display()))?;

        Ok(Self {
            path: Cow::Owned(path.display().to_string()),
            data: Cow::Owned(data),
        })
    }

    /// The path the input was loaded from.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw input text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Construct a parser over the whole input.
    #[inline]
    pub fn istr(&self) -> IStr<'_> {
        IStr::new(&self.data, 0)
    }

    /// Get the line and column of the given byte index.
    pub fn pos(&self, index: usize) -> LineCol {
        pos_from(self.data.as_bytes(), index)
    }

    /// Associate an error with the position in this input it refers to.
    ///
    /// Errors which do not originate from an [`IStrError`] are only given the
    /// path.
    pub fn context(&self, error: anyhow::Error) -> anyhow::Error {
        let pos = find_index(&error).map(|index| self.pos(index));

        error.context(ErrorContext {
            path: self.path.to_string(),
            pos,
        })
    }
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// One-based line number.
    #[inline]
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// Zero-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column)
    }
}

/// Get the position of the given byte index in `data`.
fn pos_from(data: &[u8], index: usize) -> LineCol {
    let index = index.min(data.len());
    let before = &data[..index];

    let (line, last) = memchr::memchr_iter(NL, before)
        .enumerate()
        .last()
        .map(|(line, n)| (line + 1, n + 1))
        .unwrap_or_default();

    LineCol::new(line, index - last)
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_index(error: &anyhow::Error) -> Option<usize> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span().start)
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => self.path.fmt(f),
        }
    }
}

/// Embed a puzzle input from the `inputs/` directory of the calling crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::source::Input::embedded(
            concat!("inputs/", $path),
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path)),
        )
    };
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{Input, LineCol};

    #[test]
    fn test_pos() {
        let input = Input::embedded("test.txt", "ab\ncd\n\nef");
        assert_eq!(input.pos(0), LineCol::new(0, 0));
        assert_eq!(input.pos(4), LineCol::new(1, 1));
        assert_eq!(input.pos(6), LineCol::new(2, 0));
        assert_eq!(input.pos(8), LineCol::new(3, 1));
        assert_eq!(input.pos(100), LineCol::new(3, 2));
    }

    #[test]
    fn test_context() {
        let input = Input::embedded("inputs/d00.txt", "1\n2\nthree\n");

        let error = input
            .istr()
            .lines()
            .map(|line| line.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();

        let error = input.context(error.into());
        assert_eq!(error.to_string(), "inputs/d00.txt:3:0");
        assert!(format!("{error:#}").contains("not a valid u32 `three`"));

        let error = input.context(anyhow!("no position"));
        assert_eq!(error.to_string(), "inputs/d00.txt");
    }
}
