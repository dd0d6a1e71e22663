use crate::codec::{HttpDecode, HttpEncode};
use crate::error::DecodeResult;
use bytes::Bytes;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! deref_encode {
    ($($pointer:ty),* $(,)?) => {$(
        impl<T: HttpEncode + ?Sized> HttpEncode for $pointer {
            fn encode_path_piece(&self) -> String {
                (**self).encode_path_piece()
            }

            fn encode_path_piece_escaped(&self) -> Bytes {
                (**self).encode_path_piece_escaped()
            }

            fn encode_header(&self) -> Bytes {
                (**self).encode_header()
            }

            fn encode_query_param(&self) -> String {
                (**self).encode_query_param()
            }
        }
    )*};
}

deref_encode!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! owned_decode {
    ($($pointer:ident),* $(,)?) => {$(
        impl<T: HttpDecode> HttpDecode for $pointer<T> {
            fn decode_path_piece(input: &str) -> DecodeResult<Self> {
                T::decode_path_piece(input).map($pointer::new)
            }

            fn decode_header(input: &[u8]) -> DecodeResult<Self> {
                T::decode_header(input).map($pointer::new)
            }

            fn decode_query_param(input: &str) -> DecodeResult<Self> {
                T::decode_query_param(input).map($pointer::new)
            }
        }
    )*};
}

owned_decode!(Box, Rc, Arc);
