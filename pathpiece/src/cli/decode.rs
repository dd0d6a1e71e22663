use crate::cli::{DecodeTarget, Kind, with_kind};
use anyhow::{Result, anyhow};
use pathpiece_core::{
    DecodeResult, HttpDecode, Lenient, decode_all, decode_headers, decode_query_params,
};
use std::fmt::Debug;

pub fn run(kind: Kind, target: DecodeTarget, lenient: bool, values: &[String]) -> Result<()> {
    tracing::debug!(?kind, ?target, lenient, count = values.len(), "decoding values");

    with_kind!(kind, T => {
        if lenient {
            print_decoded::<Lenient<T>>(target, values)
        } else {
            print_decoded::<T>(target, values)
        }
    })
}

fn print_decoded<T: HttpDecode + Debug>(target: DecodeTarget, values: &[String]) -> Result<()> {
    let decoded = decode_for::<T>(target, values).map_err(|e| anyhow!(e))?;

    for value in decoded {
        println!("{value:?}");
    }
    Ok(())
}

fn decode_for<T: HttpDecode>(target: DecodeTarget, values: &[String]) -> DecodeResult<Vec<T>> {
    match target {
        DecodeTarget::Path => decode_all(values),
        DecodeTarget::Query => decode_query_params(values),
        DecodeTarget::Header => decode_headers(values.iter().map(String::as_bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_reports_the_first_bad_value() {
        let values = vec!["7".to_string(), "256".to_string()];

        assert!(run(Kind::U8, DecodeTarget::Path, false, &values[..1]).is_ok());
        assert!(run(Kind::U8, DecodeTarget::Path, false, &values).is_err());
    }

    #[test]
    fn lenient_run_never_fails() {
        let values = vec!["7".to_string(), "256".to_string()];

        assert!(run(Kind::U8, DecodeTarget::Path, true, &values).is_ok());
    }

    #[test]
    fn decode_for_each_target() {
        let values = vec!["just 5".to_string()];

        assert_eq!(
            decode_for::<Option<u8>>(DecodeTarget::Query, &values),
            Ok(vec![Some(5)])
        );
        assert_eq!(
            decode_for::<Option<u8>>(DecodeTarget::Header, &values),
            Ok(vec![Some(5)])
        );
    }
}
