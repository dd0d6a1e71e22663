use crate::codec::{HttpDecode, HttpEncode};
use crate::error::DecodeResult;
use std::borrow::Cow;

impl HttpEncode for str {
    fn encode_path_piece(&self) -> String {
        self.to_string()
    }
}

impl HttpEncode for String {
    fn encode_path_piece(&self) -> String {
        self.clone()
    }
}

impl HttpDecode for String {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Ok(input.to_string())
    }
}

impl HttpEncode for Cow<'_, str> {
    fn encode_path_piece(&self) -> String {
        self.to_string()
    }
}

impl HttpDecode for Cow<'static, str> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Ok(Cow::Owned(input.to_string()))
    }
}
