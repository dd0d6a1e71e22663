use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use ::uuid::Uuid;
use bytes::Bytes;

// Lower-case hyphenated form. The header form is the same text written straight
// to ASCII bytes, and parsed from them without a UTF-8 pass.
impl HttpEncode for Uuid {
    fn encode_path_piece(&self) -> String {
        self.hyphenated().to_string()
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(&self.encode_path_piece())
    }

    fn encode_header(&self) -> Bytes {
        let mut buf = Uuid::encode_buffer();
        Bytes::copy_from_slice(self.hyphenated().encode_lower(&mut buf).as_bytes())
    }
}

impl HttpDecode for Uuid {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Uuid::try_parse(input).map_err(|e| DecodeError::malformed(input, e))
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        Uuid::try_parse_ascii(input)
            .map_err(|e| DecodeError::malformed(String::from_utf8_lossy(input), e))
    }
}
