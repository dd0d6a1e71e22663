//! Decoding and encoding whole sequences of values.
//!
//! Decoding stops at the first element that fails and returns that element's
//! error unchanged. Wrap the element type in [`crate::Lenient`] to keep going
//! past bad elements instead.

use crate::codec::{HttpDecode, HttpEncode};
use crate::error::DecodeResult;

fn decode_each<T, I, S, F>(inputs: I, decode: F) -> DecodeResult<Vec<T>>
where
    I: IntoIterator<Item = S>,
    F: Fn(S) -> DecodeResult<T>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            decode(input).inspect_err(|error| {
                tracing::debug!(index, error = %error, "batch decode stopped");
            })
        })
        .collect()
}

/// Decode every input as a path piece.
pub fn decode_all<T, I, S>(inputs: I) -> DecodeResult<Vec<T>>
where
    T: HttpDecode,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decode_each(inputs, |input| T::decode_path_piece(input.as_ref()))
}

pub fn decode_query_params<T, I, S>(inputs: I) -> DecodeResult<Vec<T>>
where
    T: HttpDecode,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decode_each(inputs, |input| T::decode_query_param(input.as_ref()))
}

pub fn decode_headers<T, I, B>(inputs: I) -> DecodeResult<Vec<T>>
where
    T: HttpDecode,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    decode_each(inputs, |input| T::decode_header(input.as_ref()))
}

pub fn encode_path_pieces<'a, T, I>(values: I) -> Vec<String>
where
    T: HttpEncode + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().map(T::encode_path_piece).collect()
}

pub fn encode_query_params<'a, T, I>(values: I) -> Vec<String>
where
    T: HttpEncode + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().map(T::encode_query_param).collect()
}

#[cfg(test)]
mod tests;
