use crate::codec::{HttpDecode, HttpEncode};
use crate::error::{DecodeError, DecodeResult};
use crate::escape::encode_unescaped;
use bytes::Bytes;
use chrono::{
    DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday,
};

// `%Y` writes years past 9999 with a leading `+` and reads them back.
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn checked<T>(input: &str, result: chrono::ParseResult<T>) -> DecodeResult<T> {
    result.map_err(|e| DecodeError::malformed(input, e))
}

/// Implements both codecs from a render function and a parse function. ISO-8601
/// text is digits and `-:.+TZ`, so the escaped form is the plain text.
macro_rules! iso8601_codec {
    ($t:ty, render = $render:expr, parse = $parse:expr $(,)?) => {
        impl HttpEncode for $t {
            fn encode_path_piece(&self) -> String {
                let render: fn(&$t) -> String = $render;
                render(self)
            }

            fn encode_path_piece_escaped(&self) -> Bytes {
                encode_unescaped(&self.encode_path_piece())
            }
        }

        impl HttpDecode for $t {
            fn decode_path_piece(input: &str) -> DecodeResult<Self> {
                let parse: fn(&str) -> DecodeResult<$t> = $parse;
                parse(input)
            }
        }
    };
}

// YYYY-MM-DD
iso8601_codec!(
    NaiveDate,
    render = |date| date.format("%Y-%m-%d").to_string(),
    parse = |input| checked(input, NaiveDate::parse_from_str(input, "%Y-%m-%d")),
);

// HH:MM:SS with an optional fraction of 3, 6 or 9 digits
iso8601_codec!(
    NaiveTime,
    render = |time| time.format("%H:%M:%S%.f").to_string(),
    parse = |input| checked(input, NaiveTime::parse_from_str(input, "%H:%M:%S%.f")),
);

iso8601_codec!(
    NaiveDateTime,
    render = |datetime| datetime.format(LOCAL_FORMAT).to_string(),
    parse = |input| checked(input, NaiveDateTime::parse_from_str(input, LOCAL_FORMAT)),
);

// Any offset is accepted on the way in and normalized to UTC.
iso8601_codec!(
    DateTime<Utc>,
    render = |datetime| format!("{}Z", datetime.naive_utc().format(LOCAL_FORMAT)),
    parse = |input| parse_zoned(input).map(|dt| dt.with_timezone(&Utc)),
);

iso8601_codec!(
    DateTime<FixedOffset>,
    render = |datetime| {
        let local = datetime.naive_local().format(LOCAL_FORMAT);
        format!("{local}{}", render_offset(datetime.offset()))
    },
    parse = parse_zoned,
);

crate::bounded_enum_codec!(Weekday {
    Weekday::Mon => "monday",
    Weekday::Tue => "tuesday",
    Weekday::Wed => "wednesday",
    Weekday::Thu => "thursday",
    Weekday::Fri => "friday",
    Weekday::Sat => "saturday",
    Weekday::Sun => "sunday",
});

crate::bounded_enum_codec!(Month {
    Month::January => "january",
    Month::February => "february",
    Month::March => "march",
    Month::April => "april",
    Month::May => "may",
    Month::June => "june",
    Month::July => "july",
    Month::August => "august",
    Month::September => "september",
    Month::October => "october",
    Month::November => "november",
    Month::December => "december",
});

// `+HH:MM`, with `:SS` added only when the offset has leftover seconds.
fn render_offset(offset: &FixedOffset) -> String {
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let secs = total.unsigned_abs();
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, body) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return None,
    };

    let mut parts = [0i32; 3];
    let mut count = 0;
    for part in body.split(':') {
        if count == parts.len() || part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        parts[count] = part.parse().ok()?;
        count += 1;
    }

    let [hours, minutes, seconds] = parts;
    if count < 2 || minutes > 59 || seconds > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60 + seconds))
}

// `<local datetime><offset>`. The offset starts at the first `Z`, `+` or `-`
// after the `T`, since the time part never contains one.
fn parse_zoned(input: &str) -> DecodeResult<DateTime<FixedOffset>> {
    let time_start = input
        .find('T')
        .ok_or_else(|| DecodeError::could_not_parse(input))?;
    let offset_start = input[time_start..]
        .find(['Z', 'z', '+', '-'])
        .map(|at| time_start + at)
        .ok_or_else(|| DecodeError::malformed(input, "missing UTC offset"))?;

    let (local, offset) = input.split_at(offset_start);
    let offset =
        parse_offset(offset).ok_or_else(|| DecodeError::malformed(input, "invalid UTC offset"))?;
    let local = checked(input, NaiveDateTime::parse_from_str(local, LOCAL_FORMAT))?;

    local
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| DecodeError::malformed(input, "datetime out of range"))
}
