//! Codecs for types with a finite, ordered set of values.
//!
//! Two strategies are provided. The table strategy renders every variant, lower-cases
//! the renderings and looks the input up among them. The trial strategy walks the
//! variants in declaration order and takes the first whose rendering is a
//! case-insensitive prefix of the input. Both agree on well-formed input.

mod cache;
mod table;
#[cfg(test)]
mod tests;
mod trial;

pub use cache::*;
pub use table::*;
pub use trial::*;

/// A type whose values can be listed exhaustively, in order.
pub trait BoundedEnum: Copy + 'static {
    const VARIANTS: &'static [Self];

    /// Name used in `Invalid <name>` messages.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }
}

/// Last path segment of the type's name, e.g. `Weekday` for `chrono::Weekday`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Implements [`crate::HttpEncode`] and [`crate::HttpDecode`] for a [`BoundedEnum`] from
/// a list of `variant => "text"` pairs. Decoding is case-insensitive and goes
/// through the cached table.
#[macro_export]
macro_rules! bounded_enum_codec {
    ($t:ty { $($variant:path => $text:literal),+ $(,)? }) => {
        impl $crate::enumeration::BoundedEnum for $t {
            const VARIANTS: &'static [Self] = &[$($variant),+];
        }

        impl $crate::HttpEncode for $t {
            fn encode_path_piece(&self) -> String {
                match self {
                    $($variant => $text.to_string(),)+
                }
            }
        }

        impl $crate::HttpDecode for $t {
            fn decode_path_piece(input: &str) -> $crate::DecodeResult<Self> {
                $crate::enumeration::decode_bounded_enum(input)
            }
        }
    };
}
