//! A bounds-checked, non-owning window over an immutable byte buffer.
//!
//! Decoding never mutates a view. Each read produces a new view starting after the
//! consumed bytes, and the decoder replaces the one it holds.
//!
//! # Example
//!
//! ```
//! use postwire::view::ByteView;
//!
//! let buf = [0x02, b'h', b'i', 0xff];
//! let view = ByteView::new(&buf);
//!
//! let text = view.slice(1, 3).unwrap();
//! assert_eq!(text.decode_utf8_prefix(2).unwrap(), "hi");
//!
//! // the original view is untouched
//! assert_eq!(view.size(), 4);
//! assert!(view.get(4).is_err());
//! ```

use crate::errors::DecodingError;
use std::{fmt, str};

/// An immutable view over `buf[start..end]`.
///
/// Invariant: `start <= end <= buf.len()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ByteView<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> ByteView<'a> {
    /// Creates a view over all of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        ByteView {
            buf,
            start: 0,
            end: buf.len(),
        }
    }

    /// Number of bytes visible through the view.
    #[inline]
    pub fn size(&self) -> usize { self.end - self.start }

    /// Is the view empty?
    #[inline]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Absolute offset of the view's first byte in the backing buffer.
    #[inline]
    pub fn offset(&self) -> usize { self.start }

    /// The visible bytes, borrowed from the backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] { &self.buf[self.start..self.end] }

    /// Returns the byte at offset `idx`, relative to the start of the view.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::OutOfBounds`] if `idx` is not smaller than the view's
    /// size.
    #[inline]
    pub fn get(&self, idx: usize) -> Result<u8, DecodingError> {
        match self.start.checked_add(idx) {
            Some(target) if target < self.end => Ok(self.buf[target]),
            _ => Err(self.index_error(idx)),
        }
    }

    /// Returns a view over `[from, to)`, relative to the start of this view.
    ///
    /// No bytes are copied.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::OutOfBounds`] unless `from <= to <= self.size()`.
    #[inline]
    pub fn slice(&self, from: usize, to: usize) -> Result<ByteView<'a>, DecodingError> {
        if from <= to && to <= self.size() {
            Ok(ByteView {
                buf: self.buf,
                start: self.start + from,
                end: self.start + to,
            })
        } else {
            Err(self.range_error(from, to))
        }
    }

    /// Returns the view with its first `n` bytes dropped.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::OutOfBounds`] if `n` exceeds the view's size.
    #[inline]
    pub fn advance(&self, n: usize) -> Result<ByteView<'a>, DecodingError> {
        self.slice(n, self.size())
    }

    /// Decodes the first `len` bytes of the view as UTF-8.
    ///
    /// Decoding is strict: malformed, truncated and overlong sequences are rejected,
    /// never replaced.
    ///
    /// # Errors
    ///
    /// * [`DecodingError::OutOfBounds`] if `len` exceeds the view's size.
    /// * [`DecodingError::InvalidEncoding`] if the bytes are not well-formed UTF-8.
    pub fn decode_utf8_prefix(&self, len: usize) -> Result<&'a str, DecodingError> {
        let prefix = self.slice(0, len)?;
        Ok(str::from_utf8(prefix.as_slice())?)
    }

    #[cold]
    fn index_error(&self, idx: usize) -> DecodingError {
        DecodingError::out_of_bounds(idx as u64, format!("view of size {}", self.size()))
    }

    #[cold]
    fn range_error(&self, from: usize, to: usize) -> DecodingError {
        let bad = if from > to { from } else { to };
        DecodingError::out_of_bounds(
            bad as u64,
            format!("range [{}, {}) of view of size {}", from, to, self.size()),
        )
    }
}

impl<'a> fmt::Debug for ByteView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("bytes", &self.as_slice())
            .finish()
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(buf: &'a [u8]) -> Self { ByteView::new(buf) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUF: [u8; 6] = [0, 1, 2, 3, 4, 5];

    #[test]
    fn index() {
        let view = ByteView::new(&BUF);
        assert_eq!(view.size(), 6);
        assert_eq!(view.get(0), Ok(0));
        assert_eq!(view.get(5), Ok(5));
        assert!(view.get(6).is_err());
        assert!(view.get(usize::max_value()).is_err());
    }

    #[test]
    fn index_is_relative() {
        let view = ByteView::new(&BUF).slice(2, 4).unwrap();
        assert_eq!(view.offset(), 2);
        assert_eq!(view.get(0), Ok(2));
        assert_eq!(view.get(1), Ok(3));
        // byte 4 exists in the buffer but not in the view
        match view.get(2) {
            Err(DecodingError::OutOfBounds { value, .. }) => assert_eq!(value, 2),
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn slices_nest() {
        let outer = ByteView::new(&BUF).slice(1, 5).unwrap();
        let inner = outer.slice(1, 3).unwrap();
        assert_eq!(inner.as_slice(), &[2, 3]);

        // can't widen past the parent, even though the buffer is larger
        assert!(inner.slice(0, 3).is_err());
        assert!(outer.slice(3, 2).is_err());
        assert_eq!(outer.slice(4, 4).unwrap().size(), 0);
        assert!(outer.slice(5, 5).is_err());
    }

    #[test]
    fn advance() {
        let view = ByteView::new(&BUF);
        let rest = view.advance(4).unwrap();
        assert_eq!(rest.as_slice(), &[4, 5]);
        assert!(rest.advance(2).unwrap().is_empty());
        assert!(rest.advance(3).is_err());

        // failed slicing leaves the original usable
        assert_eq!(view.size(), 6);
    }

    #[test]
    fn utf8_prefix() {
        let bytes = "zażółć".as_bytes();
        let view = ByteView::new(bytes);
        assert_eq!(view.decode_utf8_prefix(0), Ok(""));
        assert_eq!(view.decode_utf8_prefix(4), Ok("zaż"));
        assert_eq!(view.decode_utf8_prefix(bytes.len()), Ok("zażółć"));

        // cuts a two-byte character in half
        assert_eq!(
            view.decode_utf8_prefix(3),
            Err(DecodingError::InvalidEncoding { valid_up_to: 2 })
        );

        match view.decode_utf8_prefix(bytes.len() + 1) {
            Err(DecodingError::OutOfBounds { .. }) => {}
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn utf8_strict() {
        // overlong encoding of '/'
        let overlong = [0xc0, 0xaf];
        assert!(ByteView::new(&overlong).decode_utf8_prefix(2).is_err());

        // surrogate half
        let surrogate = [0xed, 0xa0, 0x80];
        assert!(ByteView::new(&surrogate).decode_utf8_prefix(3).is_err());
    }
}
