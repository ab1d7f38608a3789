use postwire::{encoding::*, varint::*, DecodingError};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn roundtrip<T>(t: &T) -> T
where
    T: Ser + for<'de> De<'de> + std::fmt::Debug,
{
    let enc = encode_full(t);
    match decode_full(&enc) {
        Ok(dec) => dec,
        Err(e) => panic!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{}\n", t, &enc[..], e),
    }
}

macro_rules! boundaries {
    ($($ty:ty),*) => {
        $(
            for v in [<$ty>::min_value(), <$ty>::min_value() + 1, 0, 1, <$ty>::max_value() - 1, <$ty>::max_value()].iter() {
                assert_eq!(roundtrip(v), *v);
            }
        )*
    };
}

#[test]
fn integer_boundaries() {
    boundaries!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);
}

#[test]
fn float_specials() {
    for f in [0.0f32, -0.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN, f32::MIN_POSITIVE].iter() {
        assert_eq!(roundtrip(f).to_bits(), f.to_bits());
    }
    for f in [0.0f64, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::MAX].iter() {
        assert_eq!(roundtrip(f).to_bits(), f.to_bits());
    }
}

#[test]
fn empties() {
    assert_eq!(roundtrip(&String::new()), "");
    assert_eq!(roundtrip(&Vec::<String>::new()), Vec::<String>::new());
    assert_eq!(roundtrip(&HashMap::<u8, u8>::new()), HashMap::new());
    assert_eq!(roundtrip(&()), ());
}

macro_rules! narrowing_edge {
    ($wide:ty => $($narrow:ty),*) => {
        $(
            let max = <$narrow>::max_value() as $wide;
            assert_eq!(decode_full::<$narrow>(&encode_full(&max)), Ok(<$narrow>::max_value()));
            match decode_full::<$narrow>(&encode_full(&(max + 1))) {
                Err(DecodingError::OutOfBounds { value, target }) => {
                    assert_eq!(value, (max + 1) as i128);
                    assert_eq!(target, stringify!($narrow));
                }
                other => panic!("{} accepted {}: {:?}", stringify!($narrow), max + 1, other),
            }
        )*
    };
}

#[test]
fn narrowing_at_boundaries() {
    narrowing_edge!(u64 => u16, u32);
    narrowing_edge!(i64 => i16, i32);

    // and below the minimum
    let min = i64::from(i16::min_value());
    assert_eq!(decode_full::<i16>(&encode_full(&min)), Ok(i16::min_value()));
    assert!(matches!(
        decode_full::<i16>(&encode_full(&(min - 1))),
        Err(DecodingError::OutOfBounds { .. })
    ));
    let min = i64::from(i32::min_value());
    assert!(matches!(
        decode_full::<i32>(&encode_full(&(min - 1))),
        Err(DecodingError::OutOfBounds { .. })
    ));
}

#[test]
fn borrowed_strings() {
    let enc = encode_full(&("ab", vec!["cd", ""]));
    let (a, v): (&str, Vec<&str>) = decode_full(&enc).unwrap();
    assert_eq!(a, "ab");
    assert_eq!(v, vec!["cd", ""]);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode_i64(i in proptest::num::i64::ANY) {
        prop_assert_eq!(roundtrip(&i), i);
    }

    #[test]
    fn encode_decode_u64(u in proptest::num::u64::ANY) {
        prop_assert_eq!(roundtrip(&u), u);
    }

    #[test]
    fn encode_decode_i32(i in proptest::num::i32::ANY) {
        prop_assert_eq!(roundtrip(&i), i);
    }

    #[test]
    fn encode_decode_u16(u in proptest::num::u16::ANY) {
        prop_assert_eq!(roundtrip(&u), u);
    }

    #[test]
    fn encode_decode_floats(bits in proptest::num::u64::ANY) {
        let f = f64::from_bits(bits);
        prop_assert_eq!(roundtrip(&f).to_bits(), bits);
        let g = f32::from_bits(bits as u32);
        prop_assert_eq!(roundtrip(&g).to_bits(), bits as u32);
    }

    #[test]
    fn encode_decode_strings(s in ".*") {
        prop_assert_eq!(roundtrip(&s), s);
    }

    #[test]
    fn encode_decode_chars(c in proptest::char::any()) {
        prop_assert_eq!(roundtrip(&c), c);
    }

    #[test]
    fn encode_decode_nested(
        v in prop::collection::vec(prop::option::of(".{0,8}"), 0..10),
        m in prop::collection::btree_map(proptest::num::i32::ANY, proptest::bool::ANY, 0..10),
    ) {
        let value: (Vec<Option<String>>, BTreeMap<i32, bool>) = (v, m);
        prop_assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn zigzag_bijection(n in proptest::num::i64::ANY) {
        prop_assert_eq!(unzigzag(zigzag(n)), n);
    }

    #[test]
    fn varint_is_minimal(u in proptest::num::u64::ANY) {
        let enc = encode_varint(u);
        let bits = 64 - u.leading_zeros() as usize;
        prop_assert_eq!(enc.len(), std::cmp::max(1, (bits + 6) / 7));
        // no continuation into an all-zero final byte
        if enc.len() > 1 {
            prop_assert_ne!(enc[enc.len() - 1], 0);
        }
        prop_assert!(enc[..enc.len() - 1].iter().all(|b| b & 0x80 != 0));
        prop_assert_eq!(enc[enc.len() - 1] & 0x80, 0);
    }

    #[test]
    fn decoding_garbage_never_panics(bytes in prop::collection::vec(proptest::num::u8::ANY, 0..64)) {
        let _ = decode_full::<Vec<(String, Option<f32>, i64)>>(&bytes);
        let _ = decode_full::<HashMap<u16, Vec<u8>>>(&bytes);
    }

    #[test]
    fn truncation_is_end_of_input(s in ".{1,16}", cut in 0usize..16) {
        let enc = encode_full(&s);
        let cut = cut % enc.len();
        let r = decode_full::<String>(&enc[..cut]);
        let is_eoi = matches!(r, Err(DecodingError::UnexpectedEndOfInput { .. }));
        prop_assert!(is_eoi);
    }
}
