//! Time utilities: parsing HH:MM, seconds-since-midnight conversions,
//! formatting minutes, etc.

use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

pub fn time_from_seconds(secs: i64) -> NaiveTime {
    let wrapped = secs.rem_euclid(86_400) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(wrapped, 0).unwrap_or(NaiveTime::MIN)
}

/// "08:07" for whole minutes, "08:07:30" when the value carries seconds
/// (medians of even-sized sets can land on a half minute).
pub fn format_time(t: NaiveTime) -> String {
    if t.second() == 0 {
        t.format("%H:%M").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
