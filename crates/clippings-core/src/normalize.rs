//! Conversion of captured fields into canonical clippings.

use chrono::NaiveDate;

use crate::{Byline, Clipping, Error, LocationKind, RawClipping, Result};

/// Rendering of the timestamp stored with every quote.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Turn one captured block into a [`Clipping`].
///
/// Title-only blocks are attributed to `sentinel_author`.
pub fn normalize(raw: &RawClipping<'_>, sentinel_author: &str) -> Result<Clipping> {
    let author = match raw.byline {
        Byline::Author(author) => author.replace('\\', ""),
        Byline::Anonymous => sentinel_author.to_string(),
    };

    Ok(Clipping {
        author,
        title: raw.title.to_string(),
        location_key: location_key(raw.location_marker, raw.location),
        timestamp: timestamp(raw)?,
        quote: raw.quote.to_string(),
    })
}

/// Kind prefix plus the location number exactly as captured.
pub fn location_key(marker: &str, location: &str) -> String {
    format!("{}{location}", LocationKind::from_marker(marker).prefix())
}

/// Month number (1-12) from the first three letters of a month name.
pub fn month_number(name: &str) -> Result<u32> {
    let abbrev = name
        .get(..3)
        .ok_or_else(|| Error::format("month", name))?
        .to_ascii_lowercase();

    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .and_then(|idx| u32::try_from(idx + 1).ok())
        .ok_or_else(|| Error::format("month", name))
}

/// Convert a 12-hour clock reading.
///
/// PM adds twelve modulo 24, so `12 PM` becomes hour 0 while `12 AM` stays 12.
pub const fn to_24_hour(hour: u32, pm: bool) -> u32 {
    if pm { hour.saturating_add(12) % 24 } else { hour }
}

fn timestamp(raw: &RawClipping<'_>) -> Result<String> {
    let year: i32 = parse_field("year", raw.year)?;
    if year < 1 {
        return Err(Error::format("year", raw.year));
    }
    let month = month_number(raw.month)?;
    let day: u32 = parse_field("day", raw.day)?;
    let hour: u32 = parse_field("hour", raw.hour)?;
    let minute: u32 = parse_field("minute", raw.minute)?;
    let hour = to_24_hour(hour, raw.meridiem == "PM");

    let datetime = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            Error::format(
                "timestamp",
                format!(
                    "{} {} {}, {} {}:{} {}",
                    raw.weekday, raw.month, raw.day, raw.year, raw.hour, raw.minute, raw.meridiem
                ),
            )
        })?;

    Ok(datetime.format(TIMESTAMP_FORMAT).to_string())
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::format(field, value))
}
