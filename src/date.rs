//! Strict date and time validation.
//!
//! Formats are written with single letter codes:
//!
//! | code | meaning |
//! |------|---------|
//! | `d` `j` | day of month, padded / unpadded |
//! | `D` `l` | weekday name, short / full |
//! | `m` `n` | month number, padded / unpadded |
//! | `M` `F` | month name, short / full |
//! | `Y` `y` | year, four digit / two digit |
//! | `H` `G` | hour 00-23, padded / unpadded |
//! | `h` `g` | hour 01-12, padded / unpadded |
//! | `i` `s` | minutes, seconds |
//! | `A` `a` | `AM`/`PM`, `am`/`pm` |
//! | `v` `u` | milliseconds, microseconds |
//! | `U` | seconds since the Unix epoch |
//! | `P` `O` | UTC offset, `+02:00` / `+0200` |
//!
//! A backslash makes the next character literal. Any other ASCII letter, and
//! the wildcards `? * ! | + #`, make the format unusable and nothing matches
//! it. Remaining characters are matched literally. Parts a format leaves out
//! are taken from today's date and from midnight.

use chrono::format::{parse, ParseResult, Parsed, StrftimeItems};
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d H:i:s";

const MAX_YEAR: i64 = 32767;

/// The calendar and clock components of a parsed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParts
{
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64
}

impl DateParts
{
    /// True if the parts name a real calendar day and a time of day.
    pub fn is_valid(&self) -> bool
    {
        is_valid_calendar_date(self.year, self.month, self.day)
            && is_valid_hour(self.hour)
            && is_valid_minute(self.minute)
            && is_valid_second(self.second)
    }
}

impl<'a> From<&'a NaiveDateTime> for DateParts
{
    fn from(dt: &'a NaiveDateTime) -> Self
    {
        // chrono keeps a leap second as second 59 with an extra second of nanos
        let leap = i64::from(dt.nanosecond() / 1_000_000_000);
        DateParts {
            year: i64::from(dt.year()),
            month: i64::from(dt.month()),
            day: i64::from(dt.day()),
            hour: i64::from(dt.hour()),
            minute: i64::from(dt.minute()),
            second: i64::from(dt.second()) + leap
        }
    }
}

pub fn is_valid_hour(hour: i64) -> bool { (0..=23).contains(&hour) }

pub fn is_valid_minute(minute: i64) -> bool { (0..=59).contains(&minute) }

pub fn is_valid_second(second: i64) -> bool { (0..=59).contains(&second) }

/// Gregorian leap year rule.
pub fn is_leap_year(year: i64) -> bool
{
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month, or `None` for a month outside 1-12.
pub fn days_in_month(year: i64, month: i64) -> Option<i64>
{
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None
    }
}

/// Checks a (year, month, day) triple against the calendar. Years run from
/// 1 to 32767.
pub fn is_valid_calendar_date(year: i64, month: i64, day: i64) -> bool
{
    if !(1..=MAX_YEAR).contains(&year) { return false; }
    match days_in_month(year, month) {
        Some(last) => (1..=last).contains(&day),
        None => false
    }
}

/// Which components a format string supplies.
#[derive(Default, Debug)]
struct Fields
{
    year: bool,
    month: bool,
    day: bool,
    hour: bool,
    hour12: bool,
    meridiem: bool,
    minute: bool,
    second: bool,
    timestamp: bool,
    offset: bool
}

/// Wildcards this parser cannot honour.
const UNSUPPORTED: &str = "?*!|+#";

/// Rewrites a format into strftime syntax and records what it contains.
///
/// Returns `None` if the format uses a code that has no strftime equivalent.
fn translate(format: &str) -> Option<(String, Fields)>
{
    let mut out = String::with_capacity(format.len() * 2);
    let mut f = Fields::default();
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        let spec = match c {
            'd' => { f.day = true; "%d" }
            'j' => { f.day = true; "%-d" }
            'D' => "%a",
            'l' => "%A",
            'm' => { f.month = true; "%m" }
            'n' => { f.month = true; "%-m" }
            'M' => { f.month = true; "%b" }
            'F' => { f.month = true; "%B" }
            'Y' => { f.year = true; "%Y" }
            'y' => { f.year = true; "%y" }
            'H' => { f.hour = true; "%H" }
            'G' => { f.hour = true; "%-H" }
            'h' => { f.hour12 = true; "%I" }
            'g' => { f.hour12 = true; "%-I" }
            'i' => { f.minute = true; "%M" }
            's' => { f.second = true; "%S" }
            'A' => { f.meridiem = true; "%p" }
            'a' => { f.meridiem = true; "%P" }
            'v' => "%3f",
            'u' => "%6f",
            'U' => { f.timestamp = true; "%s" }
            'P' => { f.offset = true; "%:z" }
            'O' => { f.offset = true; "%z" }
            '\\' => {
                if let Some(next) = chars.next() { push_literal(&mut out, next); }
                continue;
            }
            _ if c.is_ascii_alphabetic() || UNSUPPORTED.contains(c) => return None,
            _ => {
                push_literal(&mut out, c);
                continue;
            }
        };
        out.push_str(spec);
    }
    Some((out, f))
}

fn push_literal(out: &mut String, c: char)
{
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn fill_defaults(parsed: &mut Parsed, f: &Fields) -> ParseResult<()>
{
    // a timestamp fixes every field, and must agree with any others given
    if f.timestamp { return Ok(()); }
    if !(f.year && f.month && f.day) {
        let today = Local::now().date_naive();
        if !f.year { parsed.set_year(i64::from(today.year()))?; }
        if !f.month { parsed.set_month(i64::from(today.month()))?; }
        if !f.day { parsed.set_day(i64::from(today.day()))?; }
    }
    if !f.hour && !f.hour12 {
        if f.meridiem {
            parsed.set_hour12(12)?;
        } else {
            parsed.set_hour(0)?;
        }
    } else if f.hour12 && !f.hour && !f.meridiem {
        parsed.set_ampm(false)?;
    }
    if !f.minute { parsed.set_minute(0)?; }
    if !f.second { parsed.set_second(0)?; }
    Ok(())
}

/// Parses `value` strictly against `format`.
///
/// Returns `None` when the value does not match the format, names an
/// impossible date or time, or would be written differently when formatted
/// back with the same format.
pub fn parse_date_parts(value: &str, format: &str) -> Option<DateParts>
{
    let (spec, fields) = translate(format)?;
    let items = StrftimeItems::new(&spec);
    let mut parsed = Parsed::new();
    parse(&mut parsed, value, items.clone()).ok()?;
    fill_defaults(&mut parsed, &fields).ok()?;
    let mut again = String::with_capacity(value.len());
    let dt = if fields.offset {
        let dt = parsed.to_datetime().ok()?;
        write!(again, "{}", dt.format_with_items(items)).ok()?;
        dt.naive_local()
    } else {
        let dt = parsed.to_naive_datetime_with_offset(0).ok()?;
        write!(again, "{}", dt.format_with_items(items)).ok()?;
        dt
    };
    if again != value {
        return None;
    }
    Some(DateParts::from(&dt))
}

/// Checks that `value` matches `format` exactly and names a real date and
/// time of day.
pub fn is_valid_date(value: &str, format: &str) -> bool
{
    parse_date_parts(value, format).map_or(false, |parts| parts.is_valid())
}

/// `is_valid_date` with `DEFAULT_DATE_FORMAT`.
pub fn is_valid_datetime(value: &str) -> bool
{
    is_valid_date(value, DEFAULT_DATE_FORMAT)
}
