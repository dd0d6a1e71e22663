use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use ::cookie::Cookie;
use bytes::Bytes;

// The header rendering is the primary form; the path piece is derived from it.
impl HttpEncode for Cookie<'_> {
    fn encode_path_piece(&self) -> String {
        String::from_utf8_lossy(&self.encode_header()).into_owned()
    }

    fn encode_header(&self) -> Bytes {
        Bytes::from(self.to_string())
    }
}

impl HttpDecode for Cookie<'static> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Cookie::parse(input.to_string()).map_err(|e| DecodeError::malformed(input, e))
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        let text = std::str::from_utf8(input)?;
        Self::decode_path_piece(text)
    }
}
