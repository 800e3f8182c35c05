//! Descriptive statistics over time-of-day values and office durations,
//! overall and grouped by event category.

use crate::models::event_category::EventCategory;
use crate::models::tidy_record::TidyDayRecord;
use crate::models::time_summary::{CategorySummary, DurationSummary, GroupedSummary, TimeSummary};
use crate::utils::time::{seconds_since_midnight, time_from_seconds};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// Summarize a set of time-of-day values. Returns None for an empty set.
///
/// The median of an even-sized set is the midpoint (in whole seconds) of
/// the two middle values. The mode is the most frequent value; ties resolve
/// to the earliest time of day.
pub fn summarize_times(times: &[NaiveTime]) -> Option<TimeSummary> {
    if times.is_empty() {
        return None;
    }

    let mut sorted = times.to_vec();
    sorted.sort();
    let count = sorted.len();

    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        let lo = seconds_since_midnight(sorted[count / 2 - 1]);
        let hi = seconds_since_midnight(sorted[count / 2]);
        time_from_seconds((lo + hi) / 2)
    };

    // frequency map iterates in ascending time order, so keeping the first
    // strictly-higher count lands on the earliest tied value
    let mut freq: BTreeMap<NaiveTime, usize> = BTreeMap::new();
    for t in &sorted {
        *freq.entry(*t).or_insert(0) += 1;
    }
    let mut mode = sorted[0];
    let mut best = 0usize;
    for (t, n) in freq {
        if n > best {
            best = n;
            mode = t;
        }
    }

    let total: i64 = sorted.iter().map(|t| seconds_since_midnight(*t)).sum();
    let mean = time_from_seconds((total as f64 / count as f64).round() as i64);

    Some(TimeSummary {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        median,
        mode,
        mean,
    })
}

/// Summarize signed durations in minutes. Returns None for an empty set.
pub fn summarize_durations(minutes: &[i64]) -> Option<DurationSummary> {
    if minutes.is_empty() {
        return None;
    }

    let mut sorted = minutes.to_vec();
    sorted.sort();
    let count = sorted.len();

    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2
    };

    let total: i64 = sorted.iter().sum();
    let mean = (total as f64 / count as f64).round() as i64;

    Some(DurationSummary {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        median,
        mean,
    })
}

/// Statistics for one group of day records: clock-in times, clock-out
/// times, and the derived office duration. Absent clock values are excluded
/// from the time summaries; days missing either bound contribute no
/// duration (propagated as absent, never clamped to zero).
pub fn summarize_records(records: &[TidyDayRecord]) -> CategorySummary {
    let clock_ins: Vec<NaiveTime> = records.iter().filter_map(|r| r.clock_in).collect();
    let clock_outs: Vec<NaiveTime> = records.iter().filter_map(|r| r.clock_out).collect();
    let office: Vec<i64> = records.iter().filter_map(|r| r.office_minutes()).collect();

    CategorySummary {
        days: records.len(),
        clock_in: summarize_times(&clock_ins),
        clock_out: summarize_times(&clock_outs),
        office: summarize_durations(&office),
    }
}

/// Grouped variant: one block per known category (membership = the day's
/// indicator flag) plus the ungrouped overall block. Days carrying several
/// flags contribute to every matching group.
pub fn summarize_by_category(records: &[TidyDayRecord]) -> GroupedSummary {
    let overall = summarize_records(records);

    let per_category = EventCategory::ALL
        .iter()
        .map(|cat| {
            let subset: Vec<TidyDayRecord> = records
                .iter()
                .filter(|r| r.flags.get(*cat))
                .cloned()
                .collect();
            (*cat, summarize_records(&subset))
        })
        .collect();

    GroupedSummary {
        overall,
        per_category,
    }
}
