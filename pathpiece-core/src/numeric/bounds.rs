use crate::error::{DecodeError, DecodeResult};
use crate::numeric::ParsedInteger;
use std::fmt::Display;
use std::str::FromStr;

/// A fixed-width integer with a known range.
pub trait BoundedInteger: Copy + Display + FromStr {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! bounded_integer {
    ($($t:ty),* $(,)?) => {$(
        impl BoundedInteger for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
        }
    )*};
}

bounded_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

/// Reject `value` unless `min <= value <= max`.
pub fn check_bounds(
    value: &ParsedInteger,
    min: &ParsedInteger,
    max: &ParsedInteger,
) -> DecodeResult<()> {
    if value > max || value < min {
        return Err(DecodeError::OutOfBounds {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Narrow an arbitrary-precision value into `T`. Out-of-range values are errors;
/// nothing is truncated or wrapped.
pub fn narrow<T: BoundedInteger>(value: &ParsedInteger) -> DecodeResult<T> {
    check_bounds(value, &ParsedInteger::of(T::MIN), &ParsedInteger::of(T::MAX))?;

    // In range, so the standard parser cannot overflow.
    let text = value.to_string();
    text.parse().map_err(|_| DecodeError::could_not_parse(text))
}

/// Signed decimal text narrowed into `T`.
pub fn parse_bounded<T: BoundedInteger>(input: &str) -> DecodeResult<T> {
    let value = ParsedInteger::parse_signed(input)?;
    narrow(&value)
}

/// Like [`parse_bounded`], but a negative value is reported as an underflow
/// before any range check happens.
pub fn parse_natural<T: BoundedInteger>(input: &str) -> DecodeResult<T> {
    let value = ParsedInteger::parse_signed(input)?;
    if value.is_negative() {
        return Err(DecodeError::Underflow {
            value: value.to_string(),
        });
    }
    narrow(&value)
}
