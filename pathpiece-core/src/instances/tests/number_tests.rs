use crate::{decode_path_piece, decode_query_param, encode_path_piece, encode_path_piece_escaped};
use pretty_assertions::assert_eq;
use std::num::{NonZeroI32, NonZeroU8};

#[test]
fn u8_bounds() {
    assert_eq!(decode_path_piece::<u8>("255"), Ok(255));

    let err = decode_path_piece::<u8>("256").unwrap_err();
    assert_eq!(
        err.to_string(),
        "out of bounds: '256' (should be between 0 and 255)"
    );

    assert!(decode_path_piece::<u8>("-1").is_err());
}

#[test]
fn signed_integers() {
    assert_eq!(decode_path_piece::<i64>("-9000"), Ok(-9000));
    assert_eq!(decode_path_piece::<i32>("+12"), Ok(12));
    assert_eq!(encode_path_piece(&-5i16), "-5");
}

#[test]
fn query_param_follows_path_piece() {
    assert_eq!(decode_query_param::<u32>("42"), Ok(42));
    assert!(decode_query_param::<u32>("4 2").is_err());
}

#[test]
fn escaped_numbers_are_unchanged() {
    assert_eq!(&encode_path_piece_escaped(&-1234i32)[..], b"-1234");
    assert_eq!(&encode_path_piece_escaped(&1.5f64)[..], b"1.5");
}

#[test]
fn non_zero_rejects_zero() {
    assert_eq!(decode_path_piece::<NonZeroU8>("7"), Ok(NonZeroU8::new(7).unwrap()));
    assert_eq!(
        decode_path_piece::<NonZeroU8>("0").unwrap_err().to_string(),
        "could not parse: '0'"
    );
    assert_eq!(
        encode_path_piece(&NonZeroI32::new(-3).unwrap()),
        "-3"
    );
}

#[test]
fn floats() {
    assert_eq!(decode_path_piece::<f64>("1.5"), Ok(1.5));
    assert_eq!(decode_path_piece::<f32>("-0.25"), Ok(-0.25));
    assert_eq!(encode_path_piece(&0.1f64), "0.1");
    assert!(decode_path_piece::<f64>("one").is_err());
}
