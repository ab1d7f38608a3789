//! # postwire
//!
//! postwire is a compact, deterministic binary format. It carries no schema: the bytes
//! of a value are only meaningful to a reader that already knows its shape, and that
//! reader consumes them in the same fixed order the writer produced them.
//!
//! # Usage
//!
//! The traits [`Ser`] and [`De`] specify how a type is written and read.
//!
//! They can usually be auto-derived, and then the type is ready for serialization.
//!
//! For example:
//!
//! ```
//! use postwire::prelude::*;
//!
//! #[derive(Clone, Debug, SerDe, PartialEq)]
//! /// A silly enum, we shall make an example of it.
//! enum SillyEnum {
//!     Foo,
//!     Bar(u8, String),
//!     Baz { x: i32, y: f32 },
//! }
//!
//! let silly_example = SillyEnum::Bar(1, "hello".to_string());
//!
//! // encode
//! let encoded = encode_full(&silly_example);
//!
//! // and then immediately decode, because this is a silly example
//! let decoded: SillyEnum = decode_full(&encoded).unwrap();
//!
//! assert_eq!(silly_example, decoded);
//! ```
//!
//! # Implementing `Ser` and `De`
//!
//! Implementing the traits by hand means calling one primitive per field, in the same
//! order on both sides:
//!
//! ```
//! use postwire::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum SillyEnum {
//!     Foo,
//!     Bar(u8, String),
//!     Baz { x: i32, y: f32 },
//! }
//!
//! impl Ser for SillyEnum {
//!     fn ser<S: Serializer>(&self, s: &mut S) {
//!         match self {
//!             SillyEnum::Foo => s.put_discriminant(0), // just the index for unit variants
//!             SillyEnum::Bar(n, st) => {
//!                 s.put_discriminant(1); // index
//!                 n.ser(s); // first field
//!                 st.ser(s); // second field
//!             }
//!             SillyEnum::Baz { x, y } => {
//!                 s.put_discriminant(2);
//!                 s.put_i32(*x);
//!                 s.put_f32(*y);
//!             }
//!         }
//!     }
//! }
//!
//! impl<'de> De<'de> for SillyEnum {
//!     fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
//!         // the reader has to know how many variants there are
//!         match d.read_discriminant(3)? {
//!             0 => Ok(SillyEnum::Foo),
//!             1 => Ok(SillyEnum::Bar(u8::de(d)?, String::de(d)?)),
//!             _ => {
//!                 let x = d.read_i32()?;
//!                 let y = d.read_f32()?;
//!                 Ok(SillyEnum::Baz { x, y })
//!             }
//!         }
//!     }
//! }
//!
//! let baz = SillyEnum::Baz { x: -1, y: 0.5 };
//! let enc = encode_full(&baz);
//! assert_eq!(&enc[..], &[0x02, 0x01, 0x00, 0x00, 0x00, 0x3f]);
//! assert_eq!(decode_full::<SillyEnum>(&enc).unwrap(), baz);
//! ```
//!
//! If this example makes you sad (it has that effect on us), see [Usage](#usage).
//!
//! # Specification
//!
//! This section describes the binary format.
//!
//! ## Varints
//!
//! Unsigned integers are written as little-endian base-128 varints: 7 bits of the value
//! per byte, least significant first, with the high bit of every byte but the last set.
//! Encodings are always minimal, so a `u64` takes 1 to 10 bytes.
//!
//! ## Integers
//!
//! | Type                              | Encoding                    |
//! | ---                               | ---                         |
//! | `u8`, `i8`                        | the raw byte                |
//! | `u16`, `u32`, `u64`, `usize`      | varint                      |
//! | `i16`, `i32`, `i64`, `isize`      | varint of `(n << 1) ^ (n >> 63)` |
//!
//! The width of an integer is not written, so a reader must ask for the same width (or a
//! wider one) the writer used. Narrower reads fail with
//! [`DecodingError::OutOfBounds`] when the value doesn't fit.
//!
//! ## Constants
//!
//! | Byte   | Semantics                          |
//! | ---    | ---                                |
//! | `0x00` | `false`, absent optional value     |
//! | `0x01` | `true`, present optional value     |
//!
//! A present optional value is followed by the value itself.
//!
//! ## Floats
//!
//! Floats are their [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754) bit patterns in
//! little-endian order: 4 bytes for `f32`, 8 for `f64`.
//!
//! ## Strings and byte strings
//!
//! A varint byte length followed by the bytes. Strings must be valid UTF-8. A `char` is
//! written as a string of one character.
//!
//! ## Sequences and maps
//!
//! A varint element (or pair) count followed by the elements (or each key followed by
//! its value). Map entries are written in the map's iteration order. Fixed-size arrays
//! and tuples have no count.
//!
//! ## Enums
//!
//! The zero-based index of the variant as a varint, followed by the variant's fields.
//!
//! ## Structs
//!
//! The fields, in declaration order, with nothing in between.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

pub mod encoding;
pub mod errors;
pub mod prelude;
pub mod varint;
pub mod view;

pub use encoding::{De, Ser};
pub use errors::DecodingError;
