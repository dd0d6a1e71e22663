use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use bytes::Bytes;
use std::cmp::Ordering;
use std::fmt;

/// A decimal integer of any magnitude.
///
/// Holds the sign and the digits with leading zeros removed, which is enough to
/// order values and to compare them against the bounds of any fixed-width type
/// without ever overflowing. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedInteger {
    negative: bool,
    digits: String,
}

impl ParsedInteger {
    /// Signed decimal grammar: an optional `+` or `-` followed by one or more ASCII
    /// digits, and nothing else.
    pub fn parse_signed(input: &str) -> DecodeResult<Self> {
        let (negative, body) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        Self::from_digits(negative, body).ok_or_else(|| DecodeError::could_not_parse(input))
    }

    /// Unsigned decimal grammar: one or more ASCII digits, no sign.
    pub fn parse_unsigned(input: &str) -> DecodeResult<Self> {
        Self::from_digits(false, input).ok_or_else(|| DecodeError::could_not_parse(input))
    }

    /// Exact decimal value of any integer that renders itself through `Display`.
    pub fn of<T: fmt::Display>(value: T) -> Self {
        let text = value.to_string();
        match text.strip_prefix('-') {
            Some(digits) => Self::normalized(true, digits),
            None => Self::normalized(false, &text),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    fn from_digits(negative: bool, body: &str) -> Option<Self> {
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::normalized(negative, body))
    }

    fn normalized(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self {
                negative: false,
                digits: "0".to_string(),
            };
        }
        Self {
            negative,
            digits: trimmed.to_string(),
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for ParsedInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for ParsedInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ParsedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

// Unbounded integers use the signed grammar and render without leading zeros.
impl HttpEncode for ParsedInteger {
    fn encode_path_piece(&self) -> String {
        self.to_string()
    }

    fn encode_path_piece_escaped(&self) -> Bytes {
        encode_unescaped(&self.to_string())
    }
}

impl HttpDecode for ParsedInteger {
    fn decode_path_piece(input: &str) -> DecodeResult<Self> {
        Self::parse_signed(input)
    }
}
