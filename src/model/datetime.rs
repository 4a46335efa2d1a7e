// Lenient date/time parsing for user input and canonical formats for storage.
//
// User-entered dates go through the lenient parsers (several accepted
// formats, `None` on anything unparseable). The storage file uses the strict
// ISO formats only; loading falls back to the lenient parsers so files
// written by an older format version still round-trip.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%b %d %Y"];

const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";
const DISPLAY_TIME_FORMAT: &str = "%H%M";
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
const STORAGE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a human-entered date: ISO (`2025-02-01`), slash (`01/02/2025`) or
/// textual (`Feb 1 2025`). Returns `None` on blank or unparseable input.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parses a human-entered date-time: any accepted date form followed by a
/// time token (`1400`, `14:00`, `2pm`, `11:30am`).
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    let (date_part, time_part) = trimmed.rsplit_once(' ')?;
    let date = parse_date(date_part)?;
    let time = parse_time(time_part.trim())?;
    Some(date.and_time(time))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let lower = s.to_lowercase();

    // 12-hour marker: 2pm, 11:30am
    let parse_12h = |s: &str, is_pm: bool| -> Option<NaiveTime> {
        let (h, m) = if let Some((h_str, m_str)) = s.split_once(':') {
            (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?)
        } else {
            (s.parse::<u32>().ok()?, 0)
        };
        if !(1..=12).contains(&h) || m > 59 {
            return None;
        }
        let h_24 = if h == 12 {
            if is_pm { 12 } else { 0 }
        } else if is_pm {
            h + 12
        } else {
            h
        };
        NaiveTime::from_hms_opt(h_24, m, 0)
    };

    if let Some(stripped) = lower.strip_suffix("am") {
        return parse_12h(stripped, false);
    }
    if let Some(stripped) = lower.strip_suffix("pm") {
        return parse_12h(stripped, true);
    }

    // 24-hour with colon: 14:00
    if let Some((h_str, m_str)) = lower.split_once(':') {
        let h = h_str.parse::<u32>().ok()?;
        let m = m_str.parse::<u32>().ok()?;
        return NaiveTime::from_hms_opt(h, m, 0);
    }

    // Compact 24-hour: 1400
    if lower.len() == 4 && lower.chars().all(|c| c.is_ascii_digit()) {
        let h = lower[..2].parse::<u32>().ok()?;
        let m = lower[2..].parse::<u32>().ok()?;
        return NaiveTime::from_hms_opt(h, m, 0);
    }

    None
}

// --- DISPLAY FORMATS ---

/// Canonical display form, e.g. `Feb 20 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Canonical display form, e.g. `Feb 20 2025, 1400`.
pub fn format_date_time(dt: NaiveDateTime) -> String {
    format!(
        "{}, {}",
        dt.date().format(DISPLAY_DATE_FORMAT),
        dt.time().format(DISPLAY_TIME_FORMAT)
    )
}

// --- STORAGE FORMATS ---

pub fn format_date_for_storage(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

pub fn format_date_time_for_storage(dt: NaiveDateTime) -> String {
    dt.format(STORAGE_DATE_TIME_FORMAT).to_string()
}

/// Strict ISO parse for storage lines. Callers fall back to [`parse_date`]
/// when this fails.
pub fn parse_date_from_storage(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), STORAGE_DATE_FORMAT).ok()
}

/// Strict ISO parse for storage lines. Callers fall back to
/// [`parse_date_time`] when this fails.
pub fn parse_date_time_from_storage(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), STORAGE_DATE_TIME_FORMAT).ok()
}
