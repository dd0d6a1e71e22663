use pathpiece_core::{HttpDecode, HttpEncode, decode_header, decode_path_piece, decode_query_param};
use pretty_assertions::assert_eq;
use std::fmt::Debug;

/// Encode `value` through every target and decode it back through the matching
/// parser.
pub fn assert_round_trip<T>(value: &T)
where
    T: HttpEncode + HttpDecode + PartialEq + Debug,
{
    let piece = value.encode_path_piece();
    assert_eq!(decode_path_piece::<T>(&piece).as_ref(), Ok(value), "path piece {piece:?}");

    let param = value.encode_query_param();
    assert_eq!(decode_query_param::<T>(&param).as_ref(), Ok(value), "query param {param:?}");

    let header = value.encode_header();
    assert_eq!(decode_header::<T>(&header).as_ref(), Ok(value), "header {header:?}");
}

/// Assert that decoding `input` fails with exactly `message`.
pub fn assert_decode_error<T>(input: &str, message: &str)
where
    T: HttpDecode + Debug,
{
    match decode_path_piece::<T>(input) {
        Err(err) => assert_eq!(err.to_string(), message),
        Ok(value) => panic!("expected {input:?} to fail, got {value:?}"),
    }
}
