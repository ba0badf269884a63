use core::fmt;
use core::ops::Range;

use crate::input::{Input, InputError};

const NL: u8 = b'\n';

/// Associate positional context with an error raised while processing the
/// given input. `data` must be the original unadvanced input so that spans
/// resolve against the full blob.
pub fn error_context<E>(path: &'static str, data: Input, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_span(&error);
    let pos = pos_from(data.as_data(), span);

    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Debug, Clone, Copy)]
struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    const EMPTY: Self = Self::new(0, 0);

    const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

/// Errors can be threaded through multiple layers of processing, so the whole
/// chain has to be searched for a span.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<InputError>() {
        Some(e) => e.span.clone(),
        None => 0..0,
    }
}

/// Resolve a byte span into a line and column against the original blob.
fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(head) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, head).count();
    let start_of_line = memchr::memrchr(NL, head).map(|n| n + 1).unwrap_or_default();
    LineCol::new(line, span.start.saturating_sub(start_of_line))
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
