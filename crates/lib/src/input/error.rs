use core::fmt;
use core::ops::Range;

use thiserror::Error;

/// Boxed error raised by puzzle-specific validation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not a valid {ty} `{word}`")]
    BadValue { word: String, ty: &'static str },
    #[error("expected `{0}`")]
    Expected(&'static str),
    #[error("expected word")]
    ExpectedWord,
    #[error("missing separator {0:?}")]
    MissingSeparator(&'static str),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
    #[error(transparent)]
    Custom(BoxError),
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte span in the input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Access a custom error of type `E`, if that is what this is.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match &self.kind {
            ErrorKind::Custom(error) => error.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Custom(error) => error.source(),
            _ => None,
        }
    }
}
