use postwire::prelude::*;
use std::collections::BTreeMap;

#[derive(SerDe, Debug, PartialEq, Clone)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(SerDe, Debug, PartialEq, Clone)]
struct Meters(f32);

#[derive(SerDe, Debug, PartialEq, Clone)]
struct Marker;

#[derive(SerDe, Debug, PartialEq, Clone)]
enum Shape {
    Empty,
    Circle(Point, u32),
    Polygon { name: String, points: Vec<Point> },
}

#[derive(SerDe, Debug, PartialEq, Clone)]
struct Tagged<T> {
    tag: u8,
    items: Vec<T>,
}

#[derive(SerDe, Debug, PartialEq)]
struct Borrowed<'a> {
    key: &'a str,
    raw: &'a [u8],
}

#[derive(SerDe, Debug, PartialEq)]
enum Never {}

#[derive(SerDe, Debug, PartialEq, Clone)]
struct Nested {
    shapes: BTreeMap<String, Shape>,
    size: Option<Meters>,
    marker: Marker,
}

#[test]
fn named_struct_is_unframed() {
    let p = Point { x: -1, y: 64 };
    let enc = encode_full(&p);
    assert_eq!(&enc[..], &[0x01, 0x80, 0x01]);
    assert_eq!(decode_full::<Point>(&enc), Ok(p));
}

#[test]
fn tuple_and_unit_structs() {
    let enc = encode_full(&Meters(1.0));
    assert_eq!(&enc[..], &1.0f32.to_le_bytes());
    assert_eq!(decode_full::<Meters>(&enc), Ok(Meters(1.0)));

    assert!(encode_full(&Marker).is_empty());
    assert_eq!(decode_full::<Marker>(&[]), Ok(Marker));
}

#[test]
fn enum_variants() {
    assert_eq!(&encode_full(&Shape::Empty)[..], &[0]);

    let circle = Shape::Circle(Point { x: 1, y: 0 }, 3);
    let enc = encode_full(&circle);
    assert_eq!(&enc[..], &[1, 2, 0, 3]);
    assert_eq!(decode_full::<Shape>(&enc), Ok(circle));

    let poly = Shape::Polygon {
        name: "t".to_string(),
        points: vec![Point { x: 0, y: 0 }],
    };
    let enc = encode_full(&poly);
    assert_eq!(&enc[..], &[2, 1, b't', 1, 0, 0]);
    assert_eq!(decode_full::<Shape>(&enc), Ok(poly));
}

#[test]
fn bad_discriminant() {
    match decode_full::<Shape>(&[3]) {
        Err(DecodingError::OutOfBounds { value, .. }) => assert_eq!(value, 3),
        other => panic!("expected out of bounds, got {:?}", other),
    }
}

#[test]
fn empty_enum_never_decodes() {
    assert!(matches!(
        decode_full::<Never>(&[0]),
        Err(DecodingError::OutOfBounds { .. })
    ));
}

#[test]
fn generic_struct() {
    let t = Tagged {
        tag: 7,
        items: vec!["a".to_string(), "bc".to_string()],
    };
    let enc = encode_full(&t);
    assert_eq!(&enc[..], &[7, 2, 1, b'a', 2, b'b', b'c']);
    assert_eq!(decode_full::<Tagged<String>>(&enc), Ok(t));
}

#[test]
fn borrowing_struct() {
    let enc = encode_full(&Borrowed { key: "k", raw: &[9, 9] });
    let b: Borrowed = decode_full(&enc).unwrap();
    assert_eq!(b, Borrowed { key: "k", raw: &[9, 9] });
}

#[test]
fn nested_roundtrip() {
    let mut shapes = BTreeMap::new();
    shapes.insert("a".to_string(), Shape::Empty);
    shapes.insert("b".to_string(), Shape::Circle(Point { x: 5, y: -5 }, 10));
    let n = Nested {
        shapes,
        size: Some(Meters(2.5)),
        marker: Marker,
    };
    let enc = encode_full(&n);
    let (dec, rest) = decode_prefix::<Nested>(&enc).unwrap();
    assert_eq!(dec, n);
    assert!(rest.is_empty());
}

#[test]
fn truncated_struct() {
    let enc = encode_full(&Point { x: 1000, y: 1000 });
    assert!(matches!(
        decode_full::<Point>(&enc[..enc.len() - 1]),
        Err(DecodingError::UnexpectedEndOfInput { .. })
    ));
}
