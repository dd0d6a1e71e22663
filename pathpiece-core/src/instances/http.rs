use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use crate::numeric::{ParsedInteger, check_bounds};
use bytes::Bytes;
use http::{Method, StatusCode};

impl HttpEncode for Method {
    fn encode_path_piece(&self) -> String {
        self.as_str().to_string()
    }
}

// Method tokens are case-sensitive, so the text is taken as-is.
impl HttpDecode for Method {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Self::decode_header(input.as_bytes())
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        Method::from_bytes(input)
            .map_err(|e| DecodeError::malformed(String::from_utf8_lossy(input), e))
    }
}

impl HttpEncode for StatusCode {
    fn encode_path_piece(&self) -> String {
        self.as_str().to_string()
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(self.as_str())
    }
}

impl HttpDecode for StatusCode {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        let value = ParsedInteger::parse_unsigned(input)?;
        check_bounds(&value, &ParsedInteger::of(100), &ParsedInteger::of(999))?;

        let code = value.to_string();
        StatusCode::from_bytes(code.as_bytes()).map_err(|e| DecodeError::malformed(input, e))
    }
}
