use crate::codec::HttpEncode;
use crate::enumeration::{BoundedEnum, EnumTable, parse_case_insensitive};
use crate::error::{DecodeError, DecodeResult};
use ahash::RandomState;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};

type ErasedTable = &'static (dyn Any + Send + Sync);

// One lower-cased table per type, built on first use and never freed.
static TABLES: Lazy<DashMap<TypeId, ErasedTable, RandomState>> =
    Lazy::new(|| DashMap::with_hasher(RandomState::new()));

/// The process-wide lower-cased table of `T`'s path-piece renderings.
pub fn cached_table<T>() -> Option<&'static EnumTable<T>>
where
    T: BoundedEnum + HttpEncode + Send + Sync,
{
    let id = TypeId::of::<T>();

    let existing = TABLES.get(&id).map(|entry| *entry.value());
    let erased = match existing {
        Some(table) => table,
        None => {
            *TABLES.entry(id).or_insert_with(|| {
                let table = EnumTable::<T>::build_lowercase(T::encode_path_piece);
                tracing::trace!(
                    type_name = T::type_name(),
                    variants = table.len(),
                    "built enumeration table"
                );
                let leaked: ErasedTable = Box::leak(Box::new(table));
                leaked
            })
        }
    };

    erased.downcast_ref::<EnumTable<T>>()
}

/// Case-insensitive decode against the type's own path-piece rendering.
///
/// Same result as `parse_case_insensitive(T::encode_path_piece, input)`, without
/// rebuilding the table on every call.
pub fn decode_bounded_enum<T>(input: &str) -> DecodeResult<T>
where
    T: BoundedEnum + HttpEncode + Send + Sync,
{
    match cached_table::<T>() {
        Some(table) => table
            .lookup(&input.to_lowercase())
            .ok_or_else(|| DecodeError::could_not_parse(input)),
        None => parse_case_insensitive(T::encode_path_piece, input),
    }
}
