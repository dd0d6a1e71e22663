use crate::monoid::{All, Any, Dual, First, Last, Max, Min, Product, Sum};
use crate::{decode_path_piece, encode_path_piece};
use pretty_assertions::assert_eq;

#[test]
fn flags_use_bool_text() {
    assert_eq!(encode_path_piece(&Any(true)), "true");
    assert_eq!(decode_path_piece::<All>("False"), Ok(All(false)));
}

#[test]
fn accumulators_use_number_text() {
    assert_eq!(encode_path_piece(&Sum(10u32)), "10");
    assert_eq!(decode_path_piece::<Product<i64>>("-2"), Ok(Product(-2)));
    assert_eq!(decode_path_piece::<Min<u8>>("0"), Ok(Min(0)));
    assert_eq!(decode_path_piece::<Max<u8>>("255"), Ok(Max(255)));
    assert_eq!(decode_path_piece::<Dual<i8>>("1"), Ok(Dual(1)));
}

#[test]
fn first_and_last_use_option_text() {
    assert_eq!(encode_path_piece(&First(Some(1u8))), "just 1");
    assert_eq!(encode_path_piece(&Last::<u8>(None)), "nothing");
    assert_eq!(decode_path_piece::<Last<u8>>("just 4"), Ok(Last(Some(4))));
}
