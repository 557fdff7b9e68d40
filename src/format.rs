//! Display text helpers shared by the pages

use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use std::fmt::Display;

/// Join items as `#1`, `#1 and #2`, `#1, #2 and #3`
pub fn listify<T: Display>(items: &[T], prefix: &str) -> String {
    let items: Vec<String> = items.iter().map(|i| format!("{}{}", prefix, i)).collect();
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Parse recorded hours: `HH:MM`, `HH:MM:SS` or a plain number of hours.
///
/// Values outside the range of [`Duration`] are unreadable.
pub fn parse_hours(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if !value.contains(':') {
        let hours: f64 = value.parse().ok()?;
        if !hours.is_finite() || hours < 0.0 {
            return None;
        }
        // `as` saturates, so anything past i64 lands on MAX and fails the range check
        return Duration::try_seconds((hours * 3600.0).round() as i64);
    }

    let mut parts = value.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = match parts.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?;
    Duration::try_seconds(total)
}

/// Render a duration as `H:MM`
pub fn format_duration(value: Duration) -> String {
    let minutes = value.num_minutes().max(0);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

fn time_of(value: &str) -> Option<NaiveTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.time());
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Render a shift time as `09:30 AM`
pub fn format_shift_time(value: &str) -> Option<String> {
    time_of(value).map(|t| t.format("%I:%M %p").to_string())
}

/// Render a shift date as `Jun 1, 2018`
pub fn format_shift_date(value: &str) -> Option<String> {
    let date = match DateTime::parse_from_rfc3339(value) {
        Ok(instant) => instant.date_naive(),
        Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?,
    };
    Some(date.format("%b %-d, %Y").to_string())
}
