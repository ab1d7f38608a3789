//! Base-128 varints and the zigzag transform.
//!
//! Unsigned integers are split into 7-bit chunks, least significant chunk first. Each
//! chunk is placed in the low 7 bits of a byte, and every byte except the last has its
//! high bit set. A `u64` takes between 1 and [`MAX_VARINT_LEN`] bytes.
//!
//! Signed integers are first mapped to unsigned ones with [`zigzag`], so values of small
//! magnitude stay short whatever their sign.
//!
//! ```
//! use postwire::varint::*;
//!
//! assert_eq!(&encode_varint(zigzag(-65))[..], &[0x81, 0x01]);
//! assert_eq!(&encode_varint(u64::from(u16::max_value()))[..], &[0xff, 0xff, 0x03]);
//! ```

use crate::{errors::DecodingError, view::ByteView};
use smallvec::SmallVec;

/// The longest varint a `u64` can need.
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUE: u8 = 0x80;
const DATA: u8 = 0x7f;

/// Encodes `v` as a minimal-length varint.
#[inline]
pub fn encode_varint(mut v: u64) -> SmallVec<[u8; MAX_VARINT_LEN]> {
    let mut out = SmallVec::new();
    while v > u64::from(DATA) {
        out.push((v as u8 & DATA) | CONTINUE);
        v >>= 7;
    }
    out.push(v as u8);
    out
}

/// Number of bytes [`encode_varint`] produces for `v`.
#[inline]
pub fn varint_len(v: u64) -> usize {
    let bits = 64 - v.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        (bits + 6) / 7
    }
}

/// Decodes a varint from the front of `view`, returning it with the view that follows
/// it.
///
/// # Errors
///
/// * [`DecodingError::UnexpectedEndOfInput`] if the view ends before a byte with a clear
///   high bit.
/// * [`DecodingError::OutOfBounds`] if the value does not fit in a `u64`, which also
///   caps the varint at [`MAX_VARINT_LEN`] bytes.
pub fn decode_varint(view: ByteView) -> Result<(u64, ByteView), DecodingError> {
    let mut result = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = match view.get(i) {
            Ok(byte) => byte,
            Err(_) => return Err(DecodingError::end_of_input(i + 1, view.size())),
        };
        // the tenth byte only has room for the top bit of a u64
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(overflow(result, byte));
        }
        result |= u64::from(byte & DATA) << (7 * i);
        if byte & CONTINUE == 0 {
            return Ok((result, view.advance(i + 1)?));
        }
    }
    // a tenth byte of 0 or 1 always ends the varint
    Err(overflow(result, CONTINUE))
}

/// An overflowing varint, reported as its low 63 bits with the whole tenth byte above
/// them. Always past `u64::MAX`.
#[cold]
fn overflow(low_bits: u64, tenth: u8) -> DecodingError {
    DecodingError::out_of_bounds(i128::from(low_bits) | i128::from(tenth) << 63, "u64")
}

/// Maps a signed integer to an unsigned one, interleaving positive and negative values:
/// `0, -1, 1, -2, 2, ...` become `0, 1, 2, 3, 4, ...`.
#[inline]
pub fn zigzag(n: i64) -> u64 { ((n << 1) ^ (n >> 63)) as u64 }

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(u: u64) -> i64 { ((u >> 1) as i64) ^ -((u & 1) as i64) }

/// Narrows a decoded 64-bit value into `T`.
///
/// # Errors
///
/// Fails with [`DecodingError::OutOfBounds`] naming `target` if `v` is outside `T`'s
/// range.
#[inline]
pub fn narrow<T, V>(v: V, target: &'static str) -> Result<T, DecodingError>
where
    T: num_traits::NumCast,
    V: num_traits::NumCast + Into<i128> + Copy,
{
    match num_traits::cast::<V, T>(v) {
        Some(t) => Ok(t),
        None => Err(DecodingError::out_of_bounds(v, target)),
    }
}
