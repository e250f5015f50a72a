/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, TimeZone};

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format an instant in the timezone it carries
pub fn format_instant<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DATETIME_FORMAT).to_string()
}

/// Format an instant in the browser's local timezone
pub fn format_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format_instant(&dt.with_timezone(&Local))
}

/// Format backend `created_at` values (unix milliseconds)
pub fn format_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) if millis > 0 => format_local(&dt),
        _ => "-".to_string(),
    }
}
