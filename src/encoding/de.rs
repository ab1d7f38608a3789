use super::constants::*;
use crate::{
    errors::DecodingError,
    varint::{decode_varint, narrow, unzigzag},
    view::ByteView,
};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    convert::TryInto,
    hash::{BuildHasher, Hash},
    mem,
    rc::Rc,
    sync::Arc,
};

/// A source of encoded values.
///
/// Implementors provide the raw reads; every wire primitive has a default
/// implementation on top of them. Each read consumes exactly the bytes of one
/// primitive.
///
/// The lifetime `'de` is that of the input buffer, so strings and byte strings can be
/// borrowed from it.
pub trait Deserializer<'de> {
    /// Bytes left to read.
    fn remaining(&self) -> usize;

    /// Read one raw byte.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::UnexpectedEndOfInput`] when no input is left.
    fn read_u8(&mut self) -> Result<u8, DecodingError>;

    /// Read `len` raw bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::UnexpectedEndOfInput`] if fewer than `len` bytes are
    /// left.
    fn read_slice(&mut self, len: usize) -> Result<&'de [u8], DecodingError>;

    /// Read a varint-encoded `u64`.
    ///
    /// # Errors
    ///
    /// * [`DecodingError::UnexpectedEndOfInput`] if the varint is unterminated.
    /// * [`DecodingError::OutOfBounds`] if it overflows a `u64`.
    fn read_varint(&mut self) -> Result<u64, DecodingError>;

    /// Read a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// * [`DecodingError::UnexpectedEndOfInput`] if the string is longer than the input.
    /// * [`DecodingError::InvalidEncoding`] if the bytes aren't valid UTF-8.
    fn read_str(&mut self) -> Result<&'de str, DecodingError>;

    /// Read a value without knowing its shape.
    ///
    /// The format does not describe itself, so this always fails with
    /// [`DecodingError::UnsupportedOperation`].
    fn read_any(&mut self) -> Result<(), DecodingError> {
        Err(DecodingError::UnsupportedOperation(
            "decoding without a known shape",
        ))
    }

    /// Read a raw signed byte.
    fn read_i8(&mut self) -> Result<i8, DecodingError> { Ok(self.read_u8()? as i8) }

    /// Read a varint as a [`u16`].
    fn read_u16(&mut self) -> Result<u16, DecodingError> { narrow(self.read_varint()?, "u16") }

    /// Read a varint as a [`u32`].
    fn read_u32(&mut self) -> Result<u32, DecodingError> { narrow(self.read_varint()?, "u32") }

    /// Read a varint as a [`u64`].
    fn read_u64(&mut self) -> Result<u64, DecodingError> { self.read_varint() }

    /// Read a varint as a [`usize`].
    fn read_usize(&mut self) -> Result<usize, DecodingError> {
        narrow(self.read_varint()?, "usize")
    }

    /// Read a zigzagged varint as an [`i16`].
    fn read_i16(&mut self) -> Result<i16, DecodingError> { narrow(self.read_i64()?, "i16") }

    /// Read a zigzagged varint as an [`i32`].
    fn read_i32(&mut self) -> Result<i32, DecodingError> { narrow(self.read_i64()?, "i32") }

    /// Read a zigzagged varint as an [`i64`].
    fn read_i64(&mut self) -> Result<i64, DecodingError> { Ok(unzigzag(self.read_varint()?)) }

    /// Read a zigzagged varint as an [`isize`].
    fn read_isize(&mut self) -> Result<isize, DecodingError> {
        narrow(self.read_i64()?, "isize")
    }

    /// Read 4 little-endian bytes as an [`f32`].
    fn read_f32(&mut self) -> Result<f32, DecodingError> {
        let mut bytes = [0; F32_LEN];
        bytes.copy_from_slice(self.read_slice(F32_LEN)?);
        Ok(f32::from_bits(u32::from_le_bytes(bytes)))
    }

    /// Read 8 little-endian bytes as an [`f64`].
    fn read_f64(&mut self) -> Result<f64, DecodingError> {
        let mut bytes = [0; F64_LEN];
        bytes.copy_from_slice(self.read_slice(F64_LEN)?);
        Ok(f64::from_bits(u64::from_le_bytes(bytes)))
    }

    /// Read a [`bool`].
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::UnexpectedValue`] on any byte but `0x00` and `0x01`.
    fn read_bool(&mut self) -> Result<bool, DecodingError> {
        match self.read_u8()? {
            TRUE => Ok(true),
            FALSE => Ok(false),
            actual => Err(DecodingError::unexpected(EXPECTED_MARKER, actual)),
        }
    }

    /// Read the marker of an optional value, returning whether a value follows.
    fn read_option_marker(&mut self) -> Result<bool, DecodingError> {
        match self.read_u8()? {
            SOME => Ok(true),
            NONE => Ok(false),
            actual => Err(DecodingError::unexpected(EXPECTED_MARKER, actual)),
        }
    }

    /// Read a length-prefixed byte string.
    fn read_bytes(&mut self) -> Result<&'de [u8], DecodingError> {
        let len = self.read_len()?;
        self.read_slice(len)
    }

    /// Read the element count of a sequence or the pair count of a map.
    ///
    /// The count is not checked against the input; reading the elements fails instead
    /// once the input runs out.
    fn read_len(&mut self) -> Result<usize, DecodingError> { narrow(self.read_varint()?, "length") }

    /// Read an enum discriminant.
    ///
    /// # Arguments
    ///
    /// * `variants` - The number of variants the target enum declares.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodingError::OutOfBounds`] if the index is not below `variants`.
    fn read_discriminant(&mut self, variants: u32) -> Result<u32, DecodingError> {
        let index = self.read_varint()?;
        if index < u64::from(variants) {
            Ok(index as u32)
        } else {
            Err(DecodingError::out_of_bounds(
                index,
                format!("enum with {} variants", variants),
            ))
        }
    }
}

/// Decodes values from an in-memory buffer.
///
/// The decoder holds a single [`ByteView`] and replaces it with the view past each
/// primitive it reads.
///
/// # Example
///
/// ```
/// use postwire::prelude::*;
///
/// let bytes = [0x81, 0x01, 0x02, b'h', b'i'];
/// let mut d = Decoder::new(&bytes);
///
/// assert_eq!(d.read_i64().unwrap(), -65);
/// assert_eq!(d.read_str().unwrap(), "hi");
/// assert!(d.is_empty());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Decoder<'de> {
    input: ByteView<'de>,
}

impl<'de> Decoder<'de> {
    /// Creates a decoder reading `input` from its start.
    pub fn new(input: &'de [u8]) -> Self {
        Decoder {
            input: ByteView::new(input),
        }
    }

    /// Creates a decoder reading `view`.
    pub fn from_view(view: ByteView<'de>) -> Self { Decoder { input: view } }

    /// The unread part of the input.
    pub fn view(&self) -> ByteView<'de> { self.input }

    /// The unread bytes.
    pub fn rest(&self) -> &'de [u8] { self.input.as_slice() }

    /// Absolute offset of the next unread byte.
    pub fn offset(&self) -> usize { self.input.offset() }

    /// Has the input been read completely?
    pub fn is_empty(&self) -> bool { self.input.is_empty() }

    /// Splits off the next `len` bytes, advancing past them.
    fn take(&mut self, len: usize) -> Result<ByteView<'de>, DecodingError> {
        if len > self.input.size() {
            return Err(DecodingError::end_of_input(len, self.input.size()));
        }
        let head = self.input.slice(0, len)?;
        self.input = self.input.advance(len)?;
        Ok(head)
    }
}

impl<'de> Deserializer<'de> for Decoder<'de> {
    #[inline]
    fn remaining(&self) -> usize { self.input.size() }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, DecodingError> {
        let byte = match self.input.get(0) {
            Ok(byte) => byte,
            Err(_) => return Err(DecodingError::end_of_input(1, 0)),
        };
        self.input = self.input.advance(1)?;
        Ok(byte)
    }

    #[inline]
    fn read_slice(&mut self, len: usize) -> Result<&'de [u8], DecodingError> {
        Ok(self.take(len)?.as_slice())
    }

    #[inline]
    fn read_varint(&mut self) -> Result<u64, DecodingError> {
        let (v, rest) = decode_varint(self.input)?;
        self.input = rest;
        Ok(v)
    }

    fn read_str(&mut self) -> Result<&'de str, DecodingError> {
        // don't consume the length unless the whole string decodes
        let mut probe = *self;
        let len = probe.read_len()?;
        if len > probe.remaining() {
            return Err(DecodingError::end_of_input(len, probe.remaining()));
        }
        let s = probe.input.decode_utf8_prefix(len)?;
        probe.take(len)?;
        *self = probe;
        Ok(s)
    }
}

/// A value that can be deserialized.
///
/// Implementations read primitives in exactly the order the matching [`Ser`]
/// implementation writes them.
///
/// [`Ser`]: super::Ser
pub trait De<'de>: Sized {
    /// Reads a `Self` from `d`.
    ///
    /// # Errors
    ///
    /// Fails with whatever error the underlying reads produce.
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError>;
}

macro_rules! de_prim {
    ($($ty:ty => $read:ident),* $(,)?) => {
        $(
            impl<'de> De<'de> for $ty {
                #[inline]
                fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { d.$read() }
            }
        )*
    };
}

de_prim!(
    bool => read_bool,
    u8 => read_u8,
    i8 => read_i8,
    u16 => read_u16,
    u32 => read_u32,
    u64 => read_u64,
    usize => read_usize,
    i16 => read_i16,
    i32 => read_i32,
    i64 => read_i64,
    isize => read_isize,
    f32 => read_f32,
    f64 => read_f64,
);

// borrowed from the input, which may outlive the value
impl<'de: 'a, 'a> De<'de> for &'a str {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { d.read_str() }
}

impl<'de: 'a, 'a> De<'de> for &'a [u8] {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { d.read_bytes() }
}

impl<'de> De<'de> for char {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let s = d.read_str()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodingError::out_of_bounds(
                s.chars().count() as u64,
                "char, which holds exactly 1 character",
            )),
        }
    }
}

impl<'de> De<'de> for String {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        Ok(d.read_str()?.to_owned())
    }
}

impl<'de: 'a, 'a> De<'de> for Cow<'a, str> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        Ok(Cow::Borrowed(d.read_str()?))
    }
}

impl<'de> De<'de> for () {
    fn de<D: Deserializer<'de>>(_: &mut D) -> Result<Self, DecodingError> { Ok(()) }
}

/// Reads a length prefix for a sequence of `T`s, returning it with the number of
/// elements to preallocate.
///
/// The preallocation never takes more memory than the remaining input.
fn seq_capacity<'de, T, D: Deserializer<'de>>(d: &mut D) -> Result<(usize, usize), DecodingError> {
    let len = d.read_len()?;
    let width = mem::size_of::<T>();
    if width == 0 && len > MAX_ZERO_SIZED_LEN {
        return Err(DecodingError::out_of_bounds(
            len as u64,
            format!("sequence of zero-sized values, max {}", MAX_ZERO_SIZED_LEN),
        ));
    }
    Ok((len, len.min(d.remaining() / width.max(1))))
}

impl<'de, T: De<'de>> De<'de> for Vec<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let (len, cap) = seq_capacity::<T, _>(d)?;
        let mut out = Vec::with_capacity(cap);
        for _ in 0..len {
            out.push(T::de(d)?);
        }
        Ok(out)
    }
}

impl<'de, T: De<'de>> De<'de> for VecDeque<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        Ok(Vec::de(d)?.into())
    }
}

impl<'de, T: De<'de>, const N: usize> De<'de> for [T; N] {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let mut out = Vec::with_capacity(N);
        for _ in 0..N {
            out.push(T::de(d)?);
        }
        out.try_into()
            .map_err(|v: Vec<T>| DecodingError::out_of_bounds(v.len() as u64, "fixed-size array"))
    }
}

impl<'de, T: De<'de>> De<'de> for Option<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        if d.read_option_marker()? {
            Ok(Some(T::de(d)?))
        } else {
            Ok(None)
        }
    }
}

impl<'de, T: De<'de>, E: De<'de>> De<'de> for Result<T, E> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        match d.read_discriminant(2)? {
            0 => Ok(Ok(T::de(d)?)),
            _ => Ok(Err(E::de(d)?)),
        }
    }
}

impl<'de, K, V, H> De<'de> for HashMap<K, V, H>
where
    K: De<'de> + Eq + Hash,
    V: De<'de>,
    H: BuildHasher + Default,
{
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let (len, cap) = seq_capacity::<(K, V), _>(d)?;
        let mut out = HashMap::with_capacity_and_hasher(cap, H::default());
        for _ in 0..len {
            let k = K::de(d)?;
            let v = V::de(d)?;
            out.insert(k, v);
        }
        Ok(out)
    }
}

impl<'de, K: De<'de> + Ord, V: De<'de>> De<'de> for BTreeMap<K, V> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let (len, _) = seq_capacity::<(K, V), _>(d)?;
        let mut out = BTreeMap::new();
        for _ in 0..len {
            let k = K::de(d)?;
            let v = V::de(d)?;
            out.insert(k, v);
        }
        Ok(out)
    }
}

impl<'de, T, H> De<'de> for HashSet<T, H>
where
    T: De<'de> + Eq + Hash,
    H: BuildHasher + Default,
{
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let (len, cap) = seq_capacity::<T, _>(d)?;
        let mut out = HashSet::with_capacity_and_hasher(cap, H::default());
        for _ in 0..len {
            out.insert(T::de(d)?);
        }
        Ok(out)
    }
}

impl<'de, T: De<'de> + Ord> De<'de> for BTreeSet<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> {
        let (len, _) = seq_capacity::<T, _>(d)?;
        let mut out = BTreeSet::new();
        for _ in 0..len {
            out.insert(T::de(d)?);
        }
        Ok(out)
    }
}

impl<'de, T: De<'de>> De<'de> for Box<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { Ok(Box::new(T::de(d)?)) }
}

impl<'de, T: De<'de>> De<'de> for Rc<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { Ok(Rc::new(T::de(d)?)) }
}

impl<'de, T: De<'de>> De<'de> for Arc<T> {
    fn de<D: Deserializer<'de>>(d: &mut D) -> Result<Self, DecodingError> { Ok(Arc::new(T::de(d)?)) }
}

macro_rules! de_tuple {
    ($($name:ident)+) => {
        impl<'de, $($name: De<'de>),+> De<'de> for ($($name,)+) {
            fn de<DE: Deserializer<'de>>(d: &mut DE) -> Result<Self, DecodingError> {
                Ok(($($name::de(d)?,)+))
            }
        }
    };
}

de_tuple!(A);
de_tuple!(A B);
de_tuple!(A B C);
de_tuple!(A B C D);
de_tuple!(A B C D E);
de_tuple!(A B C D E F);
de_tuple!(A B C D E F G);
de_tuple!(A B C D E F G H);
de_tuple!(A B C D E F G H I);
de_tuple!(A B C D E F G H I J);
de_tuple!(A B C D E F G H I J K);
de_tuple!(A B C D E F G H I J K L);
