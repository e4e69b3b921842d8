/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format ISO datetime string to YYYY-MM-DD HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time = time_part
            .split(['.', 'Z', '+'])
            .next()
            .unwrap_or(time_part);
        return format!("{} {}", date_part, time);
    }
    datetime_str.to_string()
}

/// Current time from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Human readable distance between `at` and `now`
/// Example: 90 seconds -> "1 分钟前"
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds();
    if seconds < 0 {
        return "刚刚".to_string();
    }
    match seconds {
        0..=59 => "刚刚".to_string(),
        60..=3_599 => format!("{} 分钟前", seconds / 60),
        3_600..=86_399 => format!("{} 小时前", seconds / 3_600),
        _ => format!("{} 天前", seconds / 86_400),
    }
}

/// Relative label for an RFC 3339 string; falls back to the raw value
pub fn format_relative_str(datetime_str: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => format_relative(dt.with_timezone(&Utc), now),
        Err(_) => datetime_str.to_string(),
    }
}
