//! Calendar periods carried as text: a month of a given year and a quarter of a
//! given year.

use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use crate::numeric::parse_bounded;
use bytes::Bytes;
use chrono::Month;

/// A month of a specific year, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }
}

impl HttpEncode for YearMonth {
    fn encode_path_piece(&self) -> String {
        format!(
            "{}-{:02}",
            render_year(self.year),
            self.month.number_from_month()
        )
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(&self.encode_path_piece())
    }
}

impl HttpDecode for YearMonth {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        let (year, month) = split_period(input)?;

        // Exactly two digits, 01 through 12.
        let number = match month.as_bytes() {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
                u32::from(a - b'0') * 10 + u32::from(b - b'0')
            }
            _ => return Err(DecodeError::could_not_parse(input)),
        };
        let month = u8::try_from(number)
            .ok()
            .and_then(|n| Month::try_from(n).ok())
            .ok_or_else(|| DecodeError::malformed(input, "month must be between 01 and 12"))?;

        Ok(Self { year, month })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuarterOfYear {
    Q1,
    Q2,
    Q3,
    Q4,
}

crate::bounded_enum_codec!(QuarterOfYear {
    QuarterOfYear::Q1 => "q1",
    QuarterOfYear::Q2 => "q2",
    QuarterOfYear::Q3 => "q3",
    QuarterOfYear::Q4 => "q4",
});

impl QuarterOfYear {
    /// The quarter a month falls in.
    pub fn of(month: Month) -> Self {
        match month.number_from_month() {
            1..=3 => QuarterOfYear::Q1,
            4..=6 => QuarterOfYear::Q2,
            7..=9 => QuarterOfYear::Q3,
            _ => QuarterOfYear::Q4,
        }
    }
}

/// A quarter of a specific year, written `YYYY-qN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quarter {
    pub year: i32,
    pub quarter: QuarterOfYear,
}

impl Quarter {
    pub fn new(year: i32, quarter: QuarterOfYear) -> Self {
        Self { year, quarter }
    }
}

impl From<YearMonth> for Quarter {
    fn from(period: YearMonth) -> Self {
        Self::new(period.year, QuarterOfYear::of(period.month))
    }
}

impl HttpEncode for Quarter {
    fn encode_path_piece(&self) -> String {
        format!(
            "{}-{}",
            render_year(self.year),
            self.quarter.encode_path_piece()
        )
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(&self.encode_path_piece())
    }
}

impl HttpDecode for Quarter {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        let (year, quarter) = split_period(input)?;
        let quarter =
            QuarterOfYear::decode_path_piece(quarter).map_err(|_| DecodeError::could_not_parse(input))?;

        Ok(Self { year, quarter })
    }
}

// At least four digits, with a sign only for negative years.
fn render_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

// `<year>-<rest>`, split at the last dash so negative years keep their sign.
fn split_period(input: &str) -> DecodeResult<(i32, &str)> {
    let (year, rest) = input
        .rsplit_once('-')
        .ok_or_else(|| DecodeError::could_not_parse(input))?;

    let digits = year.strip_prefix('-').unwrap_or(year);
    if digits.len() < 4 || year.starts_with('+') {
        return Err(DecodeError::could_not_parse(input));
    }

    Ok((parse_bounded::<i32>(year)?, rest))
}

#[cfg(test)]
mod tests;
