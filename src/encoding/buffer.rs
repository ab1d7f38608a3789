use super::{constants::DEFAULT_CAPACITY, Serializer};
use bytes::{BufMut, Bytes, BytesMut};

/// An append-only byte accumulator for the encoder.
///
/// Capacity doubles whenever an append would not fit, so writing `n` bytes costs `O(n)`
/// overall. Capacity never shrinks.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let mut out = OutputBuffer::new();
/// out.put_str("hi");
///
/// assert_eq!(&out.finalize()[..], &[0x02, b'h', b'i']);
/// ```
#[derive(Clone, Debug)]
pub struct OutputBuffer {
    inner: BytesMut,
}

impl OutputBuffer {
    /// Creates an empty buffer with the default capacity.
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    /// Creates an empty buffer that can hold `capacity` bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        OutputBuffer {
            inner: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize { self.inner.len() }

    /// Has nothing been written yet?
    #[inline]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// Bytes the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize { self.inner.capacity() }

    /// The bytes written so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] { &self.inner[..] }

    /// Makes room for `additional` more bytes, doubling capacity until they fit.
    #[inline]
    fn grow(&mut self, additional: usize) {
        let requested = self.inner.len() + additional;
        let mut capacity = self.inner.capacity();
        if requested <= capacity {
            return;
        }

        capacity = capacity.max(1);
        while capacity < requested {
            capacity *= 2;
        }
        self.inner.reserve(capacity - self.inner.len());
    }
}

impl Default for OutputBuffer {
    fn default() -> Self { Self::new() }
}

impl Serializer for OutputBuffer {
    type Out = Bytes;

    #[inline]
    fn put_u8(&mut self, u: u8) {
        self.grow(1);
        self.inner.put_u8(u);
    }

    #[inline]
    fn put_slice(&mut self, slice: &[u8]) {
        self.grow(slice.len());
        self.inner.put_slice(slice);
    }

    fn finalize(self) -> Bytes { self.inner.freeze() }
}
