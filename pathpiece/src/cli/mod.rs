pub mod decode;
pub mod encode;

use clap::ValueEnum;

/// Target type a value is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Unit,
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    /// Integer of any magnitude
    Integer,
    F32,
    F64,
    Text,
    Uuid,
    Date,
    Time,
    LocalDatetime,
    UtcDatetime,
    ZonedDatetime,
    Weekday,
    Month,
    YearMonth,
    Quarter,
    Method,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeTarget {
    Path,
    Query,
    Header,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodeTarget {
    Path,
    Escaped,
    Query,
    Header,
}

/// Run `$body` with `$t` bound to the Rust type behind `$kind`.
macro_rules! with_kind {
    ($kind:expr, $t:ident => $body:expr) => {{
        use $crate::cli::Kind;
        match $kind {
            Kind::Unit => { type $t = (); $body }
            Kind::Bool => { type $t = bool; $body }
            Kind::Char => { type $t = char; $body }
            Kind::I8 => { type $t = i8; $body }
            Kind::I16 => { type $t = i16; $body }
            Kind::I32 => { type $t = i32; $body }
            Kind::I64 => { type $t = i64; $body }
            Kind::I128 => { type $t = i128; $body }
            Kind::U8 => { type $t = u8; $body }
            Kind::U16 => { type $t = u16; $body }
            Kind::U32 => { type $t = u32; $body }
            Kind::U64 => { type $t = u64; $body }
            Kind::U128 => { type $t = u128; $body }
            Kind::Integer => { type $t = pathpiece_core::numeric::ParsedInteger; $body }
            Kind::F32 => { type $t = f32; $body }
            Kind::F64 => { type $t = f64; $body }
            Kind::Text => { type $t = String; $body }
            Kind::Uuid => { type $t = uuid::Uuid; $body }
            Kind::Date => { type $t = chrono::NaiveDate; $body }
            Kind::Time => { type $t = chrono::NaiveTime; $body }
            Kind::LocalDatetime => { type $t = chrono::NaiveDateTime; $body }
            Kind::UtcDatetime => { type $t = chrono::DateTime<chrono::Utc>; $body }
            Kind::ZonedDatetime => { type $t = chrono::DateTime<chrono::FixedOffset>; $body }
            Kind::Weekday => { type $t = chrono::Weekday; $body }
            Kind::Month => { type $t = chrono::Month; $body }
            Kind::YearMonth => { type $t = pathpiece_core::calendar::YearMonth; $body }
            Kind::Quarter => { type $t = pathpiece_core::calendar::Quarter; $body }
            Kind::Method => { type $t = http::Method; $body }
            Kind::Status => { type $t = http::StatusCode; $body }
        }
    }};
}

pub(crate) use with_kind;

pub fn print_kinds() {
    for kind in Kind::value_variants() {
        if let Some(value) = kind.to_possible_value() {
            println!("{}", value.get_name());
        }
    }
}
