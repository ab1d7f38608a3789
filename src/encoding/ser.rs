use super::constants::*;
use crate::varint::{encode_varint, zigzag};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// A sink for encoded bytes.
///
/// Only the raw byte operations are required; every wire primitive is provided on top of
/// them by [`SerializerExt`].
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

/// The wire primitives, provided for every [`Serializer`].
///
/// Each method appends exactly the bytes of one primitive. Callers choose between the
/// signed and unsigned integer paths explicitly: `put_u32(5)` and `put_i32(5)` produce
/// different bytes.
pub trait SerializerExt: Serializer {
    /// Add a raw signed byte, with no transform.
    fn put_i8(&mut self, i: i8);
    /// Add a `u64` as a varint.
    fn put_varint(&mut self, u: u64);
    /// Add a [`u16`] as a varint.
    fn put_u16(&mut self, u: u16);
    /// Add a [`u32`] as a varint.
    fn put_u32(&mut self, u: u32);
    /// Add a [`u64`] as a varint.
    fn put_u64(&mut self, u: u64);
    /// Add a [`usize`] as a varint.
    fn put_usize(&mut self, u: usize);
    /// Add an [`i16`], zigzagged, as a varint.
    fn put_i16(&mut self, i: i16);
    /// Add an [`i32`], zigzagged, as a varint.
    fn put_i32(&mut self, i: i32);
    /// Add an [`i64`], zigzagged, as a varint.
    fn put_i64(&mut self, i: i64);
    /// Add an [`isize`], zigzagged, as a varint.
    fn put_isize(&mut self, i: isize);

    /// Add an [`f32`] as 4 little-endian bytes.
    fn put_f32(&mut self, f: f32);
    /// Add an [`f64`] as 8 little-endian bytes.
    fn put_f64(&mut self, f: f64);

    /// Add a [`bool`] as `0x00` or `0x01`.
    fn put_bool(&mut self, b: bool);
    /// Mark an absent optional value.
    fn put_none(&mut self);
    /// Mark a present optional value. The value itself must follow.
    fn put_some(&mut self);

    /// Add a string: its length in bytes, then its UTF-8 bytes.
    fn put_str(&mut self, s: &str);
    /// Add a byte string: its length, then the bytes.
    fn put_bytes(&mut self, b: &[u8]);

    /// Add the element count of a sequence or the pair count of a map.
    fn put_len(&mut self, len: usize);
    /// Add the zero-based declaration index of an enum variant.
    fn put_discriminant(&mut self, index: u32);

    /// Add a sequence: its length, then every element in order.
    ///
    /// # Arguments
    ///
    /// * `v` - The value to be added.
    fn put_arr<T: Ser>(&mut self, v: &[T]);
    /// Add a map: its length, then each key followed by its value.
    ///
    /// # Arguments
    ///
    /// * `len` - The number of pairs `entries` yields.
    /// * `entries` - The pairs, in the order they should be written.
    fn put_map<'a, K, V, I>(&mut self, len: usize, entries: I)
    where
        K: Ser + 'a,
        V: Ser + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_i8(&mut self, i: i8) { self.put_u8(i as u8) }

    #[inline]
    fn put_varint(&mut self, u: u64) {
        if u < 0x80 {
            self.put_u8(u as u8)
        } else {
            self.put_slice(&encode_varint(u))
        }
    }

    fn put_u16(&mut self, u: u16) { self.put_varint(u64::from(u)) }

    fn put_u32(&mut self, u: u32) { self.put_varint(u64::from(u)) }

    fn put_u64(&mut self, u: u64) { self.put_varint(u) }

    fn put_usize(&mut self, u: usize) { self.put_varint(u as u64) }

    fn put_i16(&mut self, i: i16) { self.put_i64(i64::from(i)) }

    fn put_i32(&mut self, i: i32) { self.put_i64(i64::from(i)) }

    #[inline]
    fn put_i64(&mut self, i: i64) { self.put_varint(zigzag(i)) }

    fn put_isize(&mut self, i: isize) { self.put_i64(i as i64) }

    fn put_f32(&mut self, f: f32) { self.put_slice(&f.to_bits().to_le_bytes()) }

    fn put_f64(&mut self, f: f64) { self.put_slice(&f.to_bits().to_le_bytes()) }

    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(TRUE)
        } else {
            self.put_u8(FALSE)
        }
    }

    fn put_none(&mut self) { self.put_u8(NONE) }

    fn put_some(&mut self) { self.put_u8(SOME) }

    fn put_str(&mut self, s: &str) { self.put_bytes(s.as_bytes()) }

    fn put_bytes(&mut self, b: &[u8]) {
        self.put_len(b.len());
        self.put_slice(b);
    }

    fn put_len(&mut self, len: usize) { self.put_varint(len as u64) }

    fn put_discriminant(&mut self, index: u32) { self.put_varint(u64::from(index)) }

    fn put_arr<T: Ser>(&mut self, v: &[T]) {
        self.put_len(v.len());
        for t in v {
            t.ser(self);
        }
    }

    fn put_map<'a, K, V, I>(&mut self, len: usize, entries: I)
    where
        K: Ser + 'a,
        V: Ser + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        self.put_len(len);
        for (k, v) in entries {
            k.ser(self);
            v.ser(self);
        }
    }
}

/// A value that can be serialized.
///
/// Implementations call [`SerializerExt`] methods in a fixed order; decoding must read
/// the same primitives in the same order. Structs write their fields back to back with
/// no framing, and enums write their discriminant followed by the variant's fields.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Ser for Point {
///     fn ser<S: Serializer>(&self, s: &mut S) {
///         s.put_i32(self.x);
///         s.put_i32(self.y);
///     }
/// }
///
/// assert_eq!(&encode_full(&Point { x: 1, y: -1 })[..], &[0x02, 0x01]);
/// ```
pub trait Ser {
    /// Writes `self` to `s`.
    fn ser<S: Serializer>(&self, s: &mut S);
}

macro_rules! ser_prim {
    ($($ty:ty => $put:ident),* $(,)?) => {
        $(
            impl Ser for $ty {
                #[inline]
                fn ser<S: Serializer>(&self, s: &mut S) { s.$put(*self) }
            }
        )*
    };
}

ser_prim!(
    bool => put_bool,
    u8 => put_u8,
    i8 => put_i8,
    u16 => put_u16,
    u32 => put_u32,
    u64 => put_u64,
    usize => put_usize,
    i16 => put_i16,
    i32 => put_i32,
    i64 => put_i64,
    isize => put_isize,
    f32 => put_f32,
    f64 => put_f64,
);

impl Ser for char {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut buf = [0; 4];
        s.put_str(self.encode_utf8(&mut buf))
    }
}

impl Ser for str {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_str(self) }
}

impl Ser for String {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_str(self) }
}

impl Ser for () {
    fn ser<S: Serializer>(&self, _: &mut S) {}
}

impl<T: Ser> Ser for [T] {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_arr(self) }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_arr(self) }
}

impl<T: Ser> Ser for VecDeque<T> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        s.put_len(self.len());
        for t in self {
            t.ser(s);
        }
    }
}

// the length is part of the shape, so no prefix
impl<T: Ser, const N: usize> Ser for [T; N] {
    fn ser<S: Serializer>(&self, s: &mut S) {
        for t in self {
            t.ser(s);
        }
    }
}

impl<T: Ser> Ser for Option<T> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        match self {
            None => s.put_none(),
            Some(t) => {
                s.put_some();
                t.ser(s);
            }
        }
    }
}

impl<T: Ser, E: Ser> Ser for Result<T, E> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        match self {
            Ok(t) => {
                s.put_discriminant(0);
                t.ser(s);
            }
            Err(e) => {
                s.put_discriminant(1);
                e.ser(s);
            }
        }
    }
}

impl<K: Ser, V: Ser, H> Ser for HashMap<K, V, H> {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_map(self.len(), self) }
}

impl<K: Ser, V: Ser> Ser for BTreeMap<K, V> {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_map(self.len(), self) }
}

impl<T: Ser, H> Ser for HashSet<T, H> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        s.put_len(self.len());
        for t in self {
            t.ser(s);
        }
    }
}

impl<T: Ser> Ser for BTreeSet<T> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        s.put_len(self.len());
        for t in self {
            t.ser(s);
        }
    }
}

impl<T: Ser + ?Sized> Ser for &T {
    fn ser<S: Serializer>(&self, s: &mut S) { (**self).ser(s) }
}

impl<T: Ser + ?Sized> Ser for Box<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { (**self).ser(s) }
}

impl<T: Ser + ?Sized> Ser for Rc<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { (**self).ser(s) }
}

impl<T: Ser + ?Sized> Ser for Arc<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { (**self).ser(s) }
}

impl<'a, T: Ser + ToOwned + ?Sized> Ser for Cow<'a, T> {
    fn ser<S: Serializer>(&self, s: &mut S) { (**self).ser(s) }
}

macro_rules! ser_tuple {
    ($($idx:tt $name:ident)+) => {
        impl<$($name: Ser),+> Ser for ($($name,)+) {
            fn ser<S: Serializer>(&self, s: &mut S) {
                $(self.$idx.ser(s);)+
            }
        }
    };
}

ser_tuple!(0 A);
ser_tuple!(0 A 1 B);
ser_tuple!(0 A 1 B 2 C);
ser_tuple!(0 A 1 B 2 C 3 D);
ser_tuple!(0 A 1 B 2 C 3 D 4 E);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K);
ser_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K 11 L);
