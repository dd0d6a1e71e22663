use crate::escape::{encode_unescaped, percent_decode_segment, percent_encode_segment};
use pretty_assertions::assert_eq;

#[test]
fn unreserved_characters_pass_through() {
    let encoded = percent_encode_segment("abc-XYZ_0.9~");

    assert_eq!(&encoded[..], b"abc-XYZ_0.9~");
}

#[test]
fn segment_sub_delimiters_are_kept() {
    let encoded = percent_encode_segment("a:b@c&d=e+f$g,h");

    assert_eq!(&encoded[..], b"a:b@c&d=e+f$g,h");
}

#[test]
fn slash_and_query_characters_are_escaped() {
    let encoded = percent_encode_segment("a/b?c#d%e f");

    assert_eq!(&encoded[..], b"a%2Fb%3Fc%23d%25e%20f");
}

#[test]
fn non_ascii_is_escaped_as_utf8() {
    let encoded = percent_encode_segment("é");

    assert_eq!(&encoded[..], b"%C3%A9");
}

#[test]
fn unescaped_fast_path_copies_bytes() {
    let encoded = encode_unescaped("2024-01-31");

    assert_eq!(&encoded[..], b"2024-01-31");
}

#[test]
fn decode_reverses_encode() {
    let encoded = percent_encode_segment("just a/b é");
    let text = std::str::from_utf8(&encoded).unwrap();

    assert_eq!(percent_decode_segment(text).unwrap(), "just a/b é");
}

#[test]
fn decode_rejects_invalid_utf8() {
    let err = percent_decode_segment("%FF").unwrap_err();

    assert!(err.to_string().starts_with("could not parse: '"));
}

#[test]
fn remaining_sub_delimiters_are_escaped() {
    let encoded = percent_encode_segment("!'()*;");

    assert_eq!(&encoded[..], b"%21%27%28%29%2A%3B");
}
