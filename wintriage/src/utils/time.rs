use crate::utils::nom_helper::{Endian, nom_unsigned_two_bytes};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use log::warn;
use std::cmp::Ordering;

/// Convert Windows FILETIME values to unixepoch milliseconds.
/// A FILETIME of zero or one outside the unixepoch range means "no timestamp"
pub(crate) fn filetime_to_unixepoch_ms(filetime: &u64) -> Option<i64> {
    let epoch_as_filetime: u64 = 116444736000000000;
    let ticks_per_ms = 10000;

    let empty = 0;
    if *filetime == empty {
        return None;
    }
    let ticks = filetime.checked_sub(epoch_as_filetime)?;
    i64::try_from(ticks / ticks_per_ms).ok()
}

/// Convert Windows FILETIME values to ISO8601 format. `None` means "no timestamp"
pub(crate) fn filetime_to_iso(filetime: &u64) -> Option<String> {
    filetime_to_unixepoch_ms(filetime).map(|timestamp| unixepoch_ms_to_iso(&timestamp))
}

/// Convert a packed 16-byte SYSTEMTIME structure to unixepoch milliseconds.
/// A year of zero means "no timestamp"
pub(crate) fn systemtime_to_unixepoch_ms(data: &[u8]) -> Option<i64> {
    let result = get_systemtime_fields(data);
    let (_, fields) = match result {
        Ok(result) => result,
        Err(_err) => {
            warn!("[time] Could not parse SYSTEMTIME bytes");
            return None;
        }
    };

    let empty = 0;
    if fields.year == empty {
        return None;
    }

    let ymd = NaiveDate::from_ymd_opt(
        i32::from(fields.year),
        u32::from(fields.month),
        u32::from(fields.day),
    )?;
    let hms = NaiveTime::from_hms_milli_opt(
        u32::from(fields.hour),
        u32::from(fields.minute),
        u32::from(fields.second),
        u32::from(fields.millisecond),
    )?;

    // SYSTEMTIME values in the Registry are already UTC
    Some(NaiveDateTime::new(ymd, hms).and_utc().timestamp_millis())
}

struct SystemTime {
    year: u16,
    month: u16,
    day: u16,
    hour: u16,
    minute: u16,
    second: u16,
    millisecond: u16,
}

/// Parse the eight (8) little endian SYSTEMTIME fields
fn get_systemtime_fields(data: &[u8]) -> nom::IResult<&[u8], SystemTime> {
    let (input, year) = nom_unsigned_two_bytes(data, Endian::Le)?;
    let (input, month) = nom_unsigned_two_bytes(input, Endian::Le)?;
    // Day of week is derivable from the date
    let (input, _day_of_week) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, day) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, hour) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, minute) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, second) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, millisecond) = nom_unsigned_two_bytes(input, Endian::Le)?;

    Ok((
        input,
        SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        },
    ))
}

/// Convert unixepoch milliseconds to ISO8601 format
pub(crate) fn unixepoch_ms_to_iso(timestamp: &i64) -> String {
    let iso_opt = DateTime::from_timestamp_millis(*timestamp);
    match iso_opt {
        Some(result) => result.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::from("1970-01-01T00:00:00.000Z"),
    }
}

/// Order ISO8601 timestamps newest first. Absent timestamps sort last
pub(crate) fn compare_timestamps_desc(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(first), Some(second)) => second.cmp(first),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
