//! # Binary encoder and decoder
//!
//! Encode and decode functions for the wire format.
//!
//! # Example
//!
//! ```
//! use postwire::prelude::*;
//!
//! // a struct that will store some data
//! #[derive(SerDe, PartialEq, Debug, Clone)]
//! struct SomeData {
//!     x: usize,
//!     y: i32,
//! }
//!
//! // here it is storing some data
//! let some_data = SomeData { x: 1, y: 2 };
//!
//! // and we've encoded it
//! let enc_full = encode_full(&some_data);
//!
//! // let's encode it a different way too
//!
//! // create a buffer
//! let out = &mut Vec::new();
//!
//! // and we've encoded it a different way
//! encode(&some_data, out);
//!
//! // but they are equivalent
//! assert_eq!(out[..], enc_full[..]);
//!
//! // Note: decoding returns a `Result`
//! let dec: SomeData = decode_full(&enc_full).unwrap(); // did the decoding succeed?
//!
//! // success!
//! assert_eq!(dec, some_data);
//! ```

use crate::errors::DecodingError;
use bytes::Bytes;

mod buffer;
pub use buffer::OutputBuffer;
pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
pub mod constants;

/// Encode `t`, appending the output to `out`.
///
/// # Arguments
///
/// * `t` - A reference to the value to be encoded.
/// * `out` - The serializer the encoded bytes are appended to.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// // output buffer
/// let out = &mut Vec::new();
///
/// // encode values back to back
/// encode(&true, out);
/// encode("hi", out);
///
/// assert_eq!(*out, vec![0x01, 0x02, b'h', b'i']);
/// ```
pub fn encode<T: Ser + ?Sized, S: Serializer>(t: &T, out: &mut S) { t.ser(out) }

/// Encodes a value into a fresh buffer.
///
/// # Arguments
///
/// * `t` - A reference to the value to be encoded.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let enc = encode_full(&-65i64);
/// assert_eq!(&enc[..], &[0x81, 0x01]);
/// ```
pub fn encode_full<T: Ser + ?Sized>(t: &T) -> Bytes {
    let mut out = OutputBuffer::new();
    t.ser(&mut out);
    out.finalize()
}

/// Decodes one value from `d`, leaving it positioned after the value.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let d = &mut Decoder::new(&[0x01, 0x05, 0x00]);
///
/// let first: Option<u8> = decode(d).unwrap();
/// let second: Option<u8> = decode(d).unwrap();
///
/// assert_eq!(first, Some(5));
/// assert_eq!(second, None);
/// ```
pub fn decode<'de, T: De<'de>>(d: &mut Decoder<'de>) -> Result<T, DecodingError> { T::de(d) }

/// Decodes a value from the start of `bs`. Trailing bytes are ignored; see
/// [`decode_prefix`] to get them back.
///
/// # Arguments
///
/// * `bs` - The encoded bytes.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let dec: Result<String, DecodingError> = decode_full(&[0x02, b'h', b'i']);
/// assert_eq!(dec.unwrap(), "hi");
/// ```
pub fn decode_full<'de, T: De<'de>>(bs: &'de [u8]) -> Result<T, DecodingError> {
    decode(&mut Decoder::new(bs))
}

/// Decodes a value from the start of `bs`, returning it with the unread bytes.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let (n, rest): (u16, _) = decode_prefix(&[0xff, 0xff, 0x03, 0xaa]).unwrap();
/// assert_eq!(n, 65535);
/// assert_eq!(rest, &[0xaa]);
/// ```
pub fn decode_prefix<'de, T: De<'de>>(bs: &'de [u8]) -> Result<(T, &'de [u8]), DecodingError> {
    let mut d = Decoder::new(bs);
    let t = decode(&mut d)?;
    Ok((t, d.rest()))
}
