use crate::{
    Const, Either, Identity, Tagged, decode_header, decode_path_piece, encode_header,
    encode_path_piece,
};
use pretty_assertions::assert_eq;
use std::cmp::Reverse;
use std::marker::PhantomData;
use std::num::Wrapping;
use std::sync::Arc;

#[test]
fn option_text() {
    assert_eq!(encode_path_piece(&Some(5)), "just 5");
    assert_eq!(encode_path_piece(&None::<i32>), "nothing");
}

#[test]
fn option_decodes_case_insensitively() {
    assert_eq!(decode_path_piece::<Option<i32>>("nothing"), Ok(None));
    assert_eq!(decode_path_piece::<Option<i32>>("NOTHING"), Ok(None));
    assert_eq!(decode_path_piece::<Option<i32>>("JUST 5"), Ok(Some(5)));
    assert_eq!(decode_path_piece::<Option<i32>>("just 5"), Ok(Some(5)));
}

#[test]
fn option_requires_discriminator() {
    assert!(decode_path_piece::<Option<i32>>("5").is_err());
    assert!(decode_path_piece::<Option<i32>>("just5").is_err());
    assert!(decode_path_piece::<Option<i32>>("nothing more").is_err());
}

#[test]
fn option_reports_inner_failure() {
    let err = decode_path_piece::<Option<u8>>("just 300").unwrap_err();

    assert_eq!(
        err.to_string(),
        "out of bounds: '300' (should be between 0 and 255)"
    );
}

#[test]
fn nested_options() {
    let value = Some(Some(1u8));
    let text = encode_path_piece(&value);

    assert_eq!(text, "just just 1");
    assert_eq!(decode_path_piece::<Option<Option<u8>>>(&text), Ok(value));
}

#[test]
fn either_text() {
    let left: Either<String, i32> = Either::Left("err".to_string());
    let right: Either<String, i32> = Either::Right(3);

    assert_eq!(encode_path_piece(&left), "left err");
    assert_eq!(encode_path_piece(&right), "right 3");
}

#[test]
fn either_decodes_right_first() {
    assert_eq!(
        decode_path_piece::<Either<String, i32>>("right 3"),
        Ok(Either::Right(3))
    );
    assert_eq!(
        decode_path_piece::<Either<String, i32>>("Left oops"),
        Ok(Either::Left("oops".to_string()))
    );
}

#[test]
fn either_falls_back_to_left_when_right_fails() {
    // "right x" is not an i32, and as a String it lacks the "left " prefix.
    let err = decode_path_piece::<Either<String, i32>>("right x").unwrap_err();

    assert_eq!(err.to_string(), "could not parse: 'right x'");
}

#[test]
fn either_converts_with_result() {
    let ok: Result<u8, String> = Either::<String, u8>::Right(1).into();
    assert_eq!(ok, Ok(1));

    let either: Either<String, u8> = Err::<u8, String>("e".into()).into();
    assert!(either.is_left());
}

struct UserId;

#[test]
fn pass_through_wrappers_keep_text() {
    assert_eq!(encode_path_piece(&Tagged::<UserId, u32>::new(7)), "7");
    assert_eq!(encode_path_piece(&Identity(true)), "true");
    assert_eq!(encode_path_piece(&Const::<u8, ()>::new(9)), "9");
    assert_eq!(encode_path_piece(&Wrapping(250u8)), "250");
    assert_eq!(encode_path_piece(&Reverse(-1i8)), "-1");
    assert_eq!(encode_path_piece(&Box::new(3u16)), "3");
    assert_eq!(encode_path_piece(&Arc::new("x".to_string())), "x");
}

#[test]
fn pass_through_wrappers_decode() {
    assert_eq!(
        decode_path_piece::<Tagged<UserId, u32>>("7").unwrap().into_inner(),
        7
    );
    assert_eq!(decode_path_piece::<Identity<bool>>("TRUE"), Ok(Identity(true)));
    assert_eq!(
        decode_path_piece::<Const<u8, ()>>("9"),
        Ok(Const(9, PhantomData))
    );
    assert_eq!(decode_path_piece::<Reverse<i8>>("-1"), Ok(Reverse(-1)));
    assert_eq!(decode_path_piece::<Box<u16>>("3"), Ok(Box::new(3)));
    assert!(decode_path_piece::<Wrapping<u8>>("256").is_err());
}

#[test]
fn pass_through_keeps_header_override() {
    let value = Identity(Some(2u8));

    assert_eq!(&encode_header(&value)[..], b"just 2");
    assert_eq!(decode_header::<Identity<Option<u8>>>(b"just 2"), Ok(value));
}
