use crate::{
    decode_all, decode_headers, decode_query_params, encode_path_pieces, encode_query_params,
};
use pretty_assertions::assert_eq;

#[test]
fn decodes_every_element() {
    assert_eq!(decode_all::<i32, _, _>(["1", "2", "3"]), Ok(vec![1, 2, 3]));
}

#[test]
fn stops_at_first_failure_with_its_message() {
    let err = decode_all::<u8, _, _>(["64", "128", "256", "-1"]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "out of bounds: '256' (should be between 0 and 255)"
    );
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(decode_all::<u8, _, &str>([]), Ok(vec![]));
}

#[test]
fn owned_strings_and_other_targets() {
    let inputs = vec!["true".to_string(), "FALSE".to_string()];
    assert_eq!(decode_query_params::<bool, _, _>(&inputs), Ok(vec![true, false]));

    let headers: [&[u8]; 2] = [b"just 1", b"nothing"];
    assert_eq!(
        decode_headers::<Option<u8>, _, _>(headers),
        Ok(vec![Some(1), None])
    );
}

#[test]
fn encodes_every_element() {
    let values = [Some(1u8), None];

    assert_eq!(encode_path_pieces(&values), vec!["just 1", "nothing"]);
    assert_eq!(encode_query_params(["a", "b"].iter().copied()), vec!["a", "b"]);
}
