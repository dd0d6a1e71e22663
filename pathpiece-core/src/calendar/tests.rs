use crate::calendar::{Quarter, QuarterOfYear, YearMonth};
use crate::{decode_path_piece, encode_path_piece};
use chrono::Month;
use pretty_assertions::assert_eq;

#[test]
fn year_month_text() {
    let period = YearMonth::new(2024, Month::March);

    assert_eq!(encode_path_piece(&period), "2024-03");
    assert_eq!(decode_path_piece::<YearMonth>("2024-03").unwrap(), period);
}

#[test]
fn year_month_pads_and_signs_years() {
    assert_eq!(encode_path_piece(&YearMonth::new(7, Month::July)), "0007-07");
    assert_eq!(
        encode_path_piece(&YearMonth::new(-44, Month::March)),
        "-0044-03"
    );
    assert_eq!(
        decode_path_piece::<YearMonth>("-0044-03").unwrap(),
        YearMonth::new(-44, Month::March)
    );
}

#[test]
fn year_month_rejects_bad_months() {
    assert!(decode_path_piece::<YearMonth>("2024-13").is_err());
    assert!(decode_path_piece::<YearMonth>("2024-00").is_err());
    assert!(decode_path_piece::<YearMonth>("2024-3").is_err());
    assert!(decode_path_piece::<YearMonth>("2024").is_err());
    assert!(decode_path_piece::<YearMonth>("24-03").is_err());
}

#[test]
fn quarter_text() {
    let quarter = Quarter::new(2024, QuarterOfYear::Q3);

    assert_eq!(encode_path_piece(&quarter), "2024-q3");
    assert_eq!(decode_path_piece::<Quarter>("2024-Q3").unwrap(), quarter);
    assert!(decode_path_piece::<Quarter>("2024-q5").is_err());
}

#[test]
fn quarter_of_month() {
    assert_eq!(QuarterOfYear::of(Month::January), QuarterOfYear::Q1);
    assert_eq!(QuarterOfYear::of(Month::June), QuarterOfYear::Q2);
    assert_eq!(QuarterOfYear::of(Month::September), QuarterOfYear::Q3);
    assert_eq!(QuarterOfYear::of(Month::December), QuarterOfYear::Q4);
    assert_eq!(
        Quarter::from(YearMonth::new(2023, Month::November)),
        Quarter::new(2023, QuarterOfYear::Q4)
    );
}
