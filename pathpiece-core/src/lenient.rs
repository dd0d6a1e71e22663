use crate::codec::{HttpDecode, HttpEncode};
use crate::enumeration::short_type_name;
use crate::error::DecodeResult;

/// Message carried by every [`Lenient::Absent`] value.
pub const LENIENT_PLACEHOLDER: &str = "Lenient data";

/// The outcome of a decode that is not allowed to fail.
///
/// Decoding a `Lenient<T>` always succeeds. A failed decode of `T` becomes
/// [`Lenient::Absent`] instead of an error, so a batch of mixed inputs can be
/// decoded without stopping at the first bad one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lenient<T> {
    Present(T),
    Absent(String),
}

impl<T> Lenient<T> {
    pub fn absent() -> Self {
        Lenient::Absent(LENIENT_PLACEHOLDER.to_string())
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Lenient::Present(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lenient::Present(value) => Some(value),
            Lenient::Absent(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Lenient::Present(value) => Ok(value),
            Lenient::Absent(message) => Err(message),
        }
    }

    fn absorb(result: DecodeResult<T>) -> Self {
        match result {
            Ok(value) => Lenient::Present(value),
            Err(error) => {
                tracing::debug!(
                    type_name = short_type_name::<T>(),
                    error = %error,
                    "lenient decode absorbed failure"
                );
                Lenient::absent()
            }
        }
    }
}

impl<T> From<Lenient<T>> for Option<T> {
    fn from(lenient: Lenient<T>) -> Self {
        lenient.into_option()
    }
}

// An absent value encodes as its message.
impl<T: HttpEncode> HttpEncode for Lenient<T> {
    fn encode_path_piece(&self) -> String {
        match self {
            Lenient::Present(value) => value.encode_path_piece(),
            Lenient::Absent(message) => message.clone(),
        }
    }
}

impl<T: HttpDecode> HttpDecode for Lenient<T> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Ok(Self::absorb(T::decode_path_piece(input)))
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        Ok(Self::absorb(T::decode_header(input)))
    }

    fn decode_query_param(input: &str) -> DecodeResult<Self> {
        Ok(Self::absorb(T::decode_query_param(input)))
    }
}

#[cfg(test)]
mod tests;
