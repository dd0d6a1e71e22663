use crate::enumeration::BoundedEnum;
use crate::error::{DecodeError, DecodeResult};

/// Every variant of `T` paired with its rendering, in declaration order.
#[derive(Debug, Clone)]
pub struct EnumTable<T> {
    entries: Vec<(String, T)>,
}

impl<T: BoundedEnum> EnumTable<T> {
    pub fn build(representation: impl Fn(&T) -> String) -> Self {
        let entries = T::VARIANTS
            .iter()
            .map(|variant| (representation(variant), *variant))
            .collect();
        Self { entries }
    }

    /// The table with every rendering lower-cased, for case-insensitive lookup.
    pub fn build_lowercase(representation: impl Fn(&T) -> String) -> Self {
        Self::build(|variant| representation(variant).to_lowercase())
    }

    /// First variant whose rendering equals `target`.
    pub fn lookup(&self, target: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(text, _)| text == target)
            .map(|(_, variant)| *variant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the table for `representation` and return the first exact match.
pub fn lookup_by_representation<T: BoundedEnum>(
    representation: impl Fn(&T) -> String,
    target: &str,
) -> Option<T> {
    EnumTable::build(representation).lookup(target)
}

/// Case-insensitive table lookup. Both the renderings and `input` are lower-cased.
pub fn parse_case_insensitive<T: BoundedEnum>(
    representation: impl Fn(&T) -> String,
    input: &str,
) -> DecodeResult<T> {
    EnumTable::build_lowercase(representation)
        .lookup(&input.to_lowercase())
        .ok_or_else(|| DecodeError::could_not_parse(input))
}
