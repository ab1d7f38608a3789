pub use crate::{
    encoding::{
        decode, decode_full, decode_prefix, encode, encode_full, De, Decoder, Deserializer,
        OutputBuffer, Ser, Serializer, SerializerExt,
    },
    errors::DecodingError,
    view::ByteView,
};
pub use bytes::Bytes;
#[cfg(feature = "derive")] pub use postwire_derive::SerDe;
