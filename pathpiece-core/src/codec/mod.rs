mod header;
mod helpers;

pub use header::*;
pub use helpers::*;

use crate::error::{DecodeError, DecodeResult};
use crate::escape::{percent_decode_segment, percent_encode_segment};
use bytes::Bytes;

/// Conversion of a value into the text shapes used on HTTP boundaries.
///
/// Every method has a default. `encode_path_piece` and `encode_query_param` are
/// defined in terms of each other, so an implementation must override at least one
/// of the two or the defaults recurse forever. The remaining two derive from the
/// path piece:
///
/// - `encode_header` is the UTF-8 bytes of `encode_path_piece`
/// - `encode_path_piece_escaped` is `encode_path_piece` percent-encoded as one segment
///
/// Override the header pair directly for types whose natural form is binary.
pub trait HttpEncode {
    /// Text of the value as a single URL path segment, before escaping.
    fn encode_path_piece(&self) -> String {
        self.encode_query_param()
    }

    /// Path piece escaped and ready to be placed in a URL.
    fn encode_path_piece_escaped(&self) -> Bytes {
        percent_encode_segment(&self.encode_path_piece())
    }

    /// Bytes suitable for an HTTP header field value.
    fn encode_header(&self) -> Bytes {
        Bytes::from(self.encode_path_piece())
    }

    /// Text of the value as a query-string value, before escaping.
    fn encode_query_param(&self) -> String {
        self.encode_path_piece()
    }
}

/// Parsing of the HTTP boundary text shapes back into a typed value.
///
/// `decode_path_piece` and `decode_query_param` are defined in terms of each other;
/// an implementation must override at least one. `decode_header` validates UTF-8 and
/// then runs `decode_path_piece`.
///
/// Parsers always receive the whole input and must reject trailing text. A `&str`
/// that only partially matches is a failure, not a partial success.
pub trait HttpDecode: Sized {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Self::decode_query_param(input)
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        let text = std::str::from_utf8(input).map_err(DecodeError::invalid_encoding)?;
        Self::decode_path_piece(text)
    }

    fn decode_query_param(input: &str) -> DecodeResult<Self> {
        Self::decode_path_piece(input)
    }
}

pub fn encode_path_piece<T: HttpEncode + ?Sized>(value: &T) -> String {
    value.encode_path_piece()
}

pub fn encode_path_piece_escaped<T: HttpEncode + ?Sized>(value: &T) -> Bytes {
    value.encode_path_piece_escaped()
}

pub fn encode_header<T: HttpEncode + ?Sized>(value: &T) -> Bytes {
    value.encode_header()
}

pub fn encode_query_param<T: HttpEncode + ?Sized>(value: &T) -> String {
    value.encode_query_param()
}

pub fn decode_path_piece<T: HttpDecode>(input: &str) -> DecodeResult<T> {
    T::decode_path_piece(input)
}

pub fn decode_header<T: HttpDecode>(input: &[u8]) -> DecodeResult<T> {
    T::decode_header(input)
}

pub fn decode_query_param<T: HttpDecode>(input: &str) -> DecodeResult<T> {
    T::decode_query_param(input)
}

/// Decode a path segment exactly as it appears in a URL, percent-escapes included.
pub fn decode_escaped_path_piece<T: HttpDecode>(escaped: &str) -> DecodeResult<T> {
    let text = percent_decode_segment(escaped)?;
    T::decode_path_piece(&text)
}
