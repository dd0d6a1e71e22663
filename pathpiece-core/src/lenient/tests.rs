use crate::lenient::{LENIENT_PLACEHOLDER, Lenient};
use crate::{decode_all, decode_header, decode_path_piece, encode_path_piece};
use pretty_assertions::assert_eq;

#[test]
fn valid_input_is_present() {
    assert_eq!(decode_path_piece::<Lenient<u8>>("42"), Ok(Lenient::Present(42)));
}

#[test]
fn malformed_input_is_absent_not_an_error() {
    let decoded = decode_path_piece::<Lenient<u8>>("forty-two").unwrap();

    assert_eq!(decoded, Lenient::Absent(LENIENT_PLACEHOLDER.to_string()));
    assert_eq!(decoded.into_result(), Err("Lenient data".to_string()));
}

#[test]
fn out_of_range_is_absent() {
    let decoded = decode_path_piece::<Lenient<u8>>("256").unwrap();

    assert!(!decoded.is_present());
}

#[test]
fn header_failures_are_absorbed_too() {
    assert_eq!(
        decode_header::<Lenient<String>>(&[0xC3]),
        Ok(Lenient::absent())
    );
}

#[test]
fn batch_of_lenient_values_never_stops() {
    let decoded = decode_all::<Lenient<i32>, _, _>(["1", "x", "3"]).unwrap();

    let present: Vec<Option<i32>> = decoded.into_iter().map(Option::from).collect();
    assert_eq!(present, vec![Some(1), None, Some(3)]);
}

#[test]
fn encoding_present_uses_inner_text() {
    assert_eq!(encode_path_piece(&Lenient::Present(true)), "true");
    assert_eq!(encode_path_piece(&Lenient::<bool>::absent()), "Lenient data");
}
