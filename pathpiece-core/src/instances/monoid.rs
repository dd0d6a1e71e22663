//! Newtypes that tag a value with how it combines. Their text shape is the wrapped
//! value's shape.

use crate::codec::{HttpDecode, HttpEncode};

/// Boolean combined with `||`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any(pub bool);

/// Boolean combined with `&&`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct All(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Sum<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Product<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Min<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Max<T>(pub T);

/// Left-most present value. Encodes like `Option<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First<T>(pub Option<T>);

/// Right-most present value. Encodes like `Option<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Last<T>(pub Option<T>);

/// `T` with its combining order flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dual<T>(pub T);

macro_rules! flag_codec {
    ($($flag:ident),*) => {$(
        impl HttpEncode for $flag {
            fn encode_path_piece(&self) -> String {
                self.0.encode_path_piece()
            }

            fn encode_path_piece_escaped(&self) -> bytes::Bytes {
                self.0.encode_path_piece_escaped()
            }
        }

        impl HttpDecode for $flag {
            fn decode_path_piece(input: &str) -> crate::DecodeResult<Self> {
                bool::decode_path_piece(input).map($flag)
            }
        }
    )*};
}

flag_codec!(Any, All);

transparent_codec!(
    Sum<T> => T,
    Product<T> => T,
    Min<T> => T,
    Max<T> => T,
    Dual<T> => T,
    First<T> => Option<T>,
    Last<T> => Option<T>,
);
