use crate::codec::{HttpDecode, HttpEncode};
use crate::enumeration::{BoundedEnum, decode_bounded_enum};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use bytes::Bytes;
use std::cmp::Ordering;
use std::convert::Infallible;

impl HttpEncode for () {
    fn encode_path_piece(&self) -> String {
        "_".to_string()
    }
}

impl HttpDecode for () {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        match input {
            "_" => Ok(()),
            _ => Err(DecodeError::could_not_parse(input)),
        }
    }
}

impl BoundedEnum for bool {
    const VARIANTS: &'static [Self] = &[false, true];
}

impl HttpEncode for bool {
    fn encode_path_piece(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(&self.encode_path_piece())
    }
}

impl HttpDecode for bool {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        decode_bounded_enum(input)
    }
}

crate::bounded_enum_codec!(Ordering {
    Ordering::Less => "less",
    Ordering::Equal => "equal",
    Ordering::Greater => "greater",
});

impl HttpEncode for char {
    fn encode_path_piece(&self) -> String {
        self.to_string()
    }
}

impl HttpDecode for char {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodeError::could_not_parse(input)),
        }
    }
}

impl HttpEncode for Infallible {
    fn encode_path_piece(&self) -> String {
        match *self {}
    }
}

// No value exists, so nothing can ever be decoded.
impl HttpDecode for Infallible {
    fn decode_path_piece(_input: &str) -> DecodeResult<Self> {
        Err(DecodeError::Unparseable {
            type_name: "Infallible",
        })
    }
}
