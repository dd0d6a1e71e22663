//! Generic single-value wrappers.
//!
//! `Option` and [`Either`] add a literal discriminator token in front of the inner
//! text. Every other wrapper here is a pure pass-through.

use crate::codec::{
    HttpDecode, HttpEncode, decode_path_piece_with_prefix, strip_prefix_ignore_case,
};
use crate::error::DecodeResult;
use std::cmp::Reverse;
use std::marker::PhantomData;
use std::num::{Saturating, Wrapping};

impl<T: HttpEncode> HttpEncode for Option<T> {
    fn encode_path_piece(&self) -> String {
        match self {
            Some(value) => format!("just {}", value.encode_path_piece()),
            None => "nothing".to_string(),
        }
    }
}

impl<T: HttpDecode> HttpDecode for Option<T> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        if strip_prefix_ignore_case(input, "nothing") == Some("") {
            return Ok(None);
        }
        decode_path_piece_with_prefix("just ", input).map(Some)
    }
}

/// One of two values. Encodes as `left <l>` or `right <r>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Either::Right(right),
            Err(left) => Either::Left(left),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Right(right) => Ok(right),
            Either::Left(left) => Err(left),
        }
    }
}

impl<L: HttpEncode, R: HttpEncode> HttpEncode for Either<L, R> {
    fn encode_path_piece(&self) -> String {
        match self {
            Either::Left(left) => format!("left {}", left.encode_path_piece()),
            Either::Right(right) => format!("right {}", right.encode_path_piece()),
        }
    }
}

impl<L: HttpDecode, R: HttpDecode> HttpDecode for Either<L, R> {
    // The right branch is tried first; a failure there falls through to the left
    // branch, whose error is the one reported.
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        decode_path_piece_with_prefix("right ", input)
            .map(Either::Right)
            .or_else(|_| decode_path_piece_with_prefix("left ", input).map(Either::Left))
    }
}

/// A value labelled with a phantom type `S`.
pub struct Tagged<S, T>(pub T, PhantomData<fn() -> S>);

impl<S, T> Tagged<S, T> {
    pub fn new(value: T) -> Self {
        Tagged(value, PhantomData)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T: Clone> Clone for Tagged<S, T> {
    fn clone(&self) -> Self {
        Tagged::new(self.0.clone())
    }
}

impl<S, T: Copy> Copy for Tagged<S, T> {}

impl<S, T: PartialEq> PartialEq for Tagged<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<S, T: Eq> Eq for Tagged<S, T> {}

impl<S, T: std::fmt::Debug> std::fmt::Debug for Tagged<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tagged").field(&self.0).finish()
    }
}

impl<S, T: HttpEncode> HttpEncode for Tagged<S, T> {
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

impl<S, T: HttpDecode> HttpDecode for Tagged<S, T> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        T::decode_path_piece(input).map(Tagged::new)
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        T::decode_header(input).map(Tagged::new)
    }

    fn decode_query_param(input: &str) -> DecodeResult<Self> {
        T::decode_query_param(input).map(Tagged::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identity<T>(pub T);

/// A `T` carrying a phantom second parameter `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Const<T, B>(pub T, pub PhantomData<B>);

impl<T, B> Const<T, B> {
    pub fn new(value: T) -> Self {
        Const(value, PhantomData)
    }
}

impl<T: HttpEncode, B> HttpEncode for Const<T, B> {
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

impl<T: HttpDecode, B> HttpDecode for Const<T, B> {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        T::decode_path_piece(input).map(Const::new)
    }

    fn decode_header(input: &[u8]) -> DecodeResult<Self> {
        T::decode_header(input).map(Const::new)
    }

    fn decode_query_param(input: &str) -> DecodeResult<Self> {
        T::decode_query_param(input).map(Const::new)
    }
}

transparent_codec!(
    Identity<T> => T,
    Wrapping<T> => T,
    Saturating<T> => T,
    Reverse<T> => T,
);
