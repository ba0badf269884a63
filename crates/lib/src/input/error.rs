use core::fmt;
use core::ops::Range;

/// The kind of an input error.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through input processing.
#[derive(Debug)]
pub struct InputError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for InputError {}
