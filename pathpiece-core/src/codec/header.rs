use crate::codec::{HttpDecode, HttpEncode};
use crate::error::DecodeResult;
use http::HeaderValue;
use http::header::InvalidHeaderValue;

/// Encode straight into an [`HeaderValue`].
///
/// Fails when the encoded bytes contain characters a header field cannot carry,
/// such as control characters.
pub fn encode_header_value<T: HttpEncode + ?Sized>(
    value: &T,
) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_maybe_shared(value.encode_header())
}

pub fn decode_header_value<T: HttpDecode>(value: &HeaderValue) -> DecodeResult<T> {
    T::decode_header(value.as_bytes())
}
