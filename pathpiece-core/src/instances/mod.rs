/// Implements both codecs for a newtype by delegating every method to the wrapped
/// value. The text shape is unchanged.
macro_rules! transparent_codec {
    ($($wrapper:ident<T> => $inner:ty),* $(,)?) => {$(
        impl<T> $crate::HttpEncode for $wrapper<T>
        where
            $inner: $crate::HttpEncode,
        {
            fn encode_path_piece(&self) -> String {
                self.0.encode_path_piece()
            }

            fn encode_path_piece_escaped(&self) -> bytes::Bytes {
                self.0.encode_path_piece_escaped()
            }

            fn encode_header(&self) -> bytes::Bytes {
                self.0.encode_header()
            }

            fn encode_query_param(&self) -> String {
                self.0.encode_query_param()
            }
        }

        impl<T> $crate::HttpDecode for $wrapper<T>
        where
            $inner: $crate::HttpDecode,
        {
            fn decode_path_piece(input: &str) -> $crate::DecodeResult<Self> {
                <$inner as $crate::HttpDecode>::decode_path_piece(input).map($wrapper)
            }

            fn decode_header(input: &[u8]) -> $crate::DecodeResult<Self> {
                <$inner as $crate::HttpDecode>::decode_header(input).map($wrapper)
            }

            fn decode_query_param(input: &str) -> $crate::DecodeResult<Self> {
                <$inner as $crate::HttpDecode>::decode_query_param(input).map($wrapper)
            }
        }
    )*};
}

#[cfg(feature = "cookie")]
mod cookie;
mod http;
pub mod monoid;
mod number;
mod pointer;
mod primitive;
#[cfg(test)]
mod tests;
mod text;
#[cfg(feature = "chrono")]
mod time;
#[cfg(feature = "uuid")]
mod uuid;
pub mod wrappers;
