use crate::cli::{EncodeTarget, Kind, with_kind};
use anyhow::{Context, Result};
use pathpiece_core::{HttpDecode, HttpEncode};

pub fn run(kind: Kind, target: EncodeTarget, values: &[String]) -> Result<()> {
    tracing::debug!(?kind, ?target, count = values.len(), "encoding values");

    with_kind!(kind, T => {
        for raw in values {
            let value = T::decode_path_piece(raw)
                .with_context(|| format!("invalid input '{raw}'"))?;
            println!("{}", render(&value, target));
        }
        Ok(())
    })
}

fn render<T: HttpEncode>(value: &T, target: EncodeTarget) -> String {
    match target {
        EncodeTarget::Path => value.encode_path_piece(),
        EncodeTarget::Query => value.encode_query_param(),
        EncodeTarget::Escaped => {
            String::from_utf8_lossy(&value.encode_path_piece_escaped()).into_owned()
        }
        EncodeTarget::Header => String::from_utf8_lossy(&value.encode_header()).into_owned(),
    }
}
