use crate::codec::HttpDecode;
use crate::error::{DecodeError, DecodeResult};
use std::fmt::Display;
use std::str::FromStr;

pub fn decode_path_piece_opt<T: HttpDecode>(input: &str) -> Option<T> {
    T::decode_path_piece(input).ok()
}

pub fn decode_header_opt<T: HttpDecode>(input: &[u8]) -> Option<T> {
    T::decode_header(input).ok()
}

pub fn decode_query_param_opt<T: HttpDecode>(input: &str) -> Option<T> {
    T::decode_query_param(input).ok()
}

/// Strip `pattern` from the front of `input`, comparing case-insensitively, and
/// decode whatever follows as a path piece.
pub fn decode_path_piece_with_prefix<T: HttpDecode>(pattern: &str, input: &str) -> DecodeResult<T> {
    match strip_prefix_ignore_case(input, pattern) {
        Some(rest) => T::decode_path_piece(rest),
        None => Err(DecodeError::could_not_parse(input)),
    }
}

pub fn decode_query_param_with_prefix<T: HttpDecode>(
    pattern: &str,
    input: &str,
) -> DecodeResult<T> {
    match strip_prefix_ignore_case(input, pattern) {
        Some(rest) => T::decode_query_param(rest),
        None => Err(DecodeError::could_not_parse(input)),
    }
}

/// Header variant of [`decode_path_piece_with_prefix`]. Header prefixes are matched
/// byte for byte.
pub fn decode_header_with_prefix<T: HttpDecode>(pattern: &[u8], input: &[u8]) -> DecodeResult<T> {
    match input.strip_prefix(pattern) {
        Some(rest) => T::decode_header(rest),
        None => Err(DecodeError::could_not_parse(
            String::from_utf8_lossy(input).into_owned(),
        )),
    }
}

/// `Display` rendered in lower case.
pub fn display_text_data<T: Display + ?Sized>(value: &T) -> String {
    value.to_string().to_lowercase()
}

/// Parse through `FromStr`, reporting any failure as `could not parse`.
pub fn from_str_text_data<T: FromStr>(input: &str) -> DecodeResult<T> {
    input
        .parse()
        .map_err(|_| DecodeError::could_not_parse(input))
}

pub fn parse_maybe_text_data<T>(parse: impl FnOnce(&str) -> Option<T>, input: &str) -> DecodeResult<T> {
    parse(input).ok_or_else(|| DecodeError::could_not_parse(input))
}

/// Case-insensitive `str::strip_prefix`. Characters are compared after Unicode
/// lower-casing, one at a time.
pub fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = input.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
