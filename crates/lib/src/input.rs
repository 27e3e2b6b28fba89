//! Input parser.

mod error;

use core::any::type_name;
use core::ops::Range;
use core::str::FromStr;

use bstr::BStr;
use memchr::memmem;

pub use self::error::{BoxError, ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Keeps track of where in the full input the current slice starts, so that
/// errors can point at the offending text.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a str,
    /// Byte index of `data` within the whole input.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a str, index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// The span this input covers.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.index..self.index + self.data.len()
    }

    /// Construct an error covering this input.
    #[inline]
    pub fn error(&self, kind: ErrorKind) -> IStrError {
        IStrError::new(self.span(), kind)
    }

    /// Construct an error covering this input from a custom error.
    #[inline]
    pub fn custom<E>(&self, error: E) -> IStrError
    where
        E: Into<BoxError>,
    {
        self.error(ErrorKind::Custom(error.into()))
    }

    /// Split once at the first occurence of `sep`, returning the input before
    /// and after it.
    pub fn split_once(&self, sep: &str) -> Option<(IStr<'a>, IStr<'a>)> {
        let at = memmem::find(self.data.as_bytes(), sep.as_bytes())?;
        let head = self.slice(0..at)?;
        let tail = self.slice(at + sep.len()..self.data.len())?;
        Some((head, tail))
    }

    /// Like [`IStr::split_once`], but errors if the separator is missing.
    pub fn cut(&self, sep: &'static str) -> Result<(IStr<'a>, IStr<'a>)> {
        self.split_once(sep)
            .ok_or_else(|| self.error(ErrorKind::MissingSeparator(sep)))
    }

    /// Iterate over lines.
    ///
    /// A trailing newline does not produce an empty final line, and a
    /// trailing `\r` is stripped from each line.
    #[inline]
    pub fn lines(&self) -> Lines<'a> {
        Lines { rest: *self }
    }

    /// Iterate over groups of lines separated by blank lines.
    #[inline]
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks { rest: *self }
    }

    /// Parse the next whitespace-separated word as `T`, returns `None` if
    /// there is no more non-whitespace data to process.
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
    {
        let Some(word) = self.try_word() else {
            return Ok(None);
        };

        Ok(Some(word.parse()?))
    }

    /// Parse the next whitespace-separated word as `T`.
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromStr,
    {
        let index = self.index;

        let Some(value) = self.try_next()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedWord));
        };

        Ok(value)
    }

    /// Consume the literal word `expected`.
    pub fn expect(&mut self, expected: &'static str) -> Result<()> {
        let index = self.index;

        match self.try_word() {
            Some(word) if word.data == expected => Ok(()),
            Some(word) => Err(word.error(ErrorKind::Expected(expected))),
            None => Err(IStrError::new(
                index..self.index,
                ErrorKind::Expected(expected),
            )),
        }
    }

    /// Parse the whole input, ignoring surrounding whitespace, as `T`.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
    {
        let trimmed = self.trim();

        match trimmed.data.parse() {
            Ok(value) => Ok(value),
            Err(..) => Err(trimmed.error(ErrorKind::BadValue {
                word: trimmed.data.to_owned(),
                ty: type_name::<T>(),
            })),
        }
    }

    /// Error if anything but whitespace remains.
    pub fn finish(&self) -> Result<()> {
        let trimmed = self.trim();

        if trimmed.is_empty() {
            return Ok(());
        }

        Err(trimmed.error(ErrorKind::Trailing(trimmed.data.to_owned())))
    }

    /// Trim surrounding whitespace.
    pub fn trim(&self) -> IStr<'a> {
        let start = self.data.len() - self.data.trim_start().len();
        let end = self.data.trim_end().len().max(start);
        self.slice(start..end).unwrap_or(*self)
    }

    fn try_word(&mut self) -> Option<IStr<'a>> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(s);
            return None;
        }

        let word = self.slice(s..n)?;
        self.advance(n);
        Some(word)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.as_bytes().get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<IStr<'a>> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// Iterator over lines, see [`IStr::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: IStr<'a>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = IStr<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (end, n) = match memchr::memchr(NL, self.rest.data.as_bytes()) {
            Some(at) => (at, at + 1),
            None => (self.rest.len(), self.rest.len()),
        };

        let mut line = self.rest.slice(0..end)?;
        self.rest.advance(n);

        if let Some(data) = line.data.strip_suffix('\r') {
            line.data = data;
        }

        Some(line)
    }
}

/// Iterator over blank-line separated groups, see [`IStr::blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: IStr<'a>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = IStr<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut lines = self.rest.lines();
        let mut first = None::<IStr<'a>>;
        let mut end = 0;

        loop {
            let before = lines.rest;

            let Some(line) = lines.next() else {
                break;
            };

            if line.data.trim().is_empty() {
                if first.is_some() {
                    break;
                }

                continue;
            }

            if first.is_none() {
                first = Some(before);
            }

            end = line.index + line.len();
        }

        self.rest = lines.rest;
        let first = first?;
        first.slice(0..end - first.index)
    }
}
