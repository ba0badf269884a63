//! Input parser.

mod error;

#[cfg(test)]
mod tests;

use std::str::from_utf8;

pub use self::error::{ErrorKind, InputError};

pub(self) type Result<T> = std::result::Result<T, InputError>;

/// Cursor over an input blob.
///
/// The cursor is cheap to copy and only ever moves forward. `index` is the
/// absolute byte offset into the original blob, so spans in errors can be
/// resolved against it even after parsing has advanced.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    /// Remaining data being parsed.
    data: &'static [u8],
    /// Absolute offset of `data` in the original blob.
    index: usize,
}

impl Input {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Absolute byte offset of the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the remaining data being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Eat the given literal at the cursor.
    ///
    /// On a match the cursor advances past the literal and `true` is
    /// returned. On a mismatch the cursor is left untouched. Matching is
    /// exact and byte-for-byte.
    #[inline]
    pub fn eat(&mut self, literal: &[u8]) -> bool {
        if !self.data.starts_with(literal) {
            return false;
        }

        self.advance(literal.len());
        true
    }

    /// Advance the cursor by `n` bytes, saturating at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Try to parse the next value as `T`, returns `Ok(None)` if the data at
    /// the cursor is not a value of type `T`.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Find the first position at or after `n` matching the predicate, or the
    /// end of input.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Eat a run of ASCII digits at the cursor, with an optional leading sign
    /// if `signed` is set. Returns `None` without moving the cursor if the
    /// run contains no digits.
    fn eat_number(&mut self, signed: bool) -> Option<&'static str> {
        let s = usize::from(signed && self.data.first() == Some(&b'-'));
        let n = self.find(s, |b| !b.is_ascii_digit());

        if n == s {
            return None;
        }

        let data = self.data.get(..n)?;
        self.advance(n);
        from_utf8(data).ok()
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Try to parse a value at the cursor, `Ok(None)` if it doesn't match.
    fn try_from_input(p: &mut Input) -> Result<Option<Self>>;
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty, $signed:literal) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
                let index = p.index;

                let Some(string) = p.eat_number($signed) else {
                    return Ok(None);
                };

                let Ok(n) = str::parse(string) else {
                    return Err(InputError::new(index..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(n))
            }
        }
    };
}

integer!(usize, false);
integer!(u8, false);
integer!(u16, false);
integer!(u32, false);
integer!(u64, false);
integer!(u128, false);
integer!(isize, true);
integer!(i8, true);
integer!(i16, true);
integer!(i32, true);
integer!(i64, true);
integer!(i128, true);
