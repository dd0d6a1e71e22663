use crate::error::{DecodeError, DecodeResult};
use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters that may appear unescaped inside a single path segment.
///
/// RFC 3986 unreserved characters (ALPHA / DIGIT / "-" / "." / "_" / "~"), ":" and
/// "@", and the sub-delimiters "&", "=", "+", "$" and ",". The other sub-delimiters
/// ("!", "'", "(", ")", "*", ";") are escaped even though `pchar` allows them. "/" is
/// escaped since the text is one segment, never a path. "?", "#", "%" and everything
/// non-ASCII are escaped too.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',');

/// Percent-encode `text` as a single URL path segment.
pub fn percent_encode_segment(text: &str) -> Bytes {
    Bytes::from(utf8_percent_encode(text, PATH_SEGMENT).to_string())
}

/// Plain UTF-8 conversion with no escaping at all.
///
/// Only valid for representations that can never contain a character outside
/// [`PATH_SEGMENT`]'s allowed set, e.g. decimal digits or ISO-8601 dates. Nothing
/// checks this at runtime.
pub fn encode_unescaped(text: &str) -> Bytes {
    Bytes::copy_from_slice(text.as_bytes())
}

/// Undo [`percent_encode_segment`]. The decoded bytes must be valid UTF-8.
pub fn percent_decode_segment(escaped: &str) -> DecodeResult<String> {
    percent_decode_str(escaped)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(DecodeError::invalid_encoding)
}

#[cfg(test)]
mod tests;
