use chrono::{DateTime, NaiveDate, NaiveDateTime};

const LABEL_FORMAT: &str = "%b %Y";

/// "2025-05-15" → "May 2025". Absent or empty input yields `None`; anything
/// else that is not a calendar date is returned as-is.
pub fn format_target_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|raw| !raw.is_empty())?;

    match parse_calendar_date(raw.trim()) {
        Some(date) => Some(date.format(LABEL_FORMAT).to_string()),
        None => {
            tracing::debug!("Target date '{}' is not a calendar date, using it verbatim", raw);
            Some(raw.to_string())
        }
    }
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        return Some(date);
    }
    // Bare year means January
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}
