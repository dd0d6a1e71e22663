use crate::codec::{HttpEncode, strip_prefix_ignore_case};
use crate::enumeration::BoundedEnum;
use crate::error::{DecodeError, DecodeResult};

/// First variant, in declaration order, whose rendering is a case-insensitive
/// prefix of `input`, together with the text left over after it.
///
/// The first match wins even when a later variant would match more of the input.
pub fn trial_prefix<'a, T: BoundedEnum>(
    representation: impl Fn(&T) -> String,
    input: &'a str,
) -> Option<(T, &'a str)> {
    T::VARIANTS.iter().find_map(|variant| {
        strip_prefix_ignore_case(input, &representation(variant)).map(|rest| (*variant, rest))
    })
}

/// Decode by trying each variant in turn.
///
/// The winning variant must cover the whole input. There is no backtracking: if
/// the first prefix match leaves text behind, decoding fails even when a later
/// variant would have matched exactly.
pub fn parse_by_trial<T: BoundedEnum>(
    representation: impl Fn(&T) -> String,
    input: &str,
) -> DecodeResult<T> {
    match trial_prefix(representation, input) {
        Some((variant, "")) => Ok(variant),
        _ => Err(DecodeError::InvalidVariant {
            type_name: T::type_name(),
        }),
    }
}

/// [`parse_by_trial`] using the type's own path-piece rendering.
pub fn parse_enum_by_trial<T: BoundedEnum + HttpEncode>(input: &str) -> DecodeResult<T> {
    parse_by_trial(T::encode_path_piece, input)
}
