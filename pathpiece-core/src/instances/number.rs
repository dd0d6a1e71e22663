use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use crate::numeric::{parse_bounded, parse_natural};
use bytes::Bytes;
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};

// Decimal text never needs escaping, so every numeric type takes the fast path.
macro_rules! decimal_encode {
    ($($t:ty),* $(,)?) => {$(
        impl HttpEncode for $t {
            fn encode_path_piece(&self) -> String {
                self.to_string()
            }

            fn encode_path_piece_escaped(&self) -> Bytes {
                encode_unescaped(&self.to_string())
            }
        }
    )*};
}

decimal_encode!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

macro_rules! integer_decode {
    ($parse:ident => $($t:ty),* $(,)?) => {$(
        impl HttpDecode for $t {
            fn decode_path_piece(input: &str) -> DecodeResult<Self> {
                $parse(input)
            }
        }
    )*};
}

integer_decode!(parse_bounded => i8, i16, i32, i64, i128, isize);
integer_decode!(parse_natural => u8, u16, u32, u64, u128, usize);

macro_rules! non_zero_codec {
    ($($nz:ty => $t:ty),* $(,)?) => {$(
        impl HttpEncode for $nz {
            fn encode_path_piece(&self) -> String {
                self.get().encode_path_piece()
            }

            fn encode_path_piece_escaped(&self) -> Bytes {
                self.get().encode_path_piece_escaped()
            }
        }

        impl HttpDecode for $nz {
            fn decode_path_piece(input: &str) -> DecodeResult<Self> {
                let value = <$t>::decode_path_piece(input)?;
                <$nz>::new(value).ok_or_else(|| DecodeError::could_not_parse(input))
            }
        }
    )*};
}

non_zero_codec!(
    NonZeroI8 => i8,
    NonZeroI16 => i16,
    NonZeroI32 => i32,
    NonZeroI64 => i64,
    NonZeroI128 => i128,
    NonZeroIsize => isize,
    NonZeroU8 => u8,
    NonZeroU16 => u16,
    NonZeroU32 => u32,
    NonZeroU64 => u64,
    NonZeroU128 => u128,
    NonZeroUsize => usize,
);

macro_rules! float_decode {
    ($($t:ty),* $(,)?) => {$(
        impl HttpDecode for $t {
            fn decode_path_piece(input: &str) -> DecodeResult<Self> {
                input
                    .parse()
                    .map_err(|e| DecodeError::malformed(input, e))
            }
        }
    )*};
}

float_decode!(f32, f64);
