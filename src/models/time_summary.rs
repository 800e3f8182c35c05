use super::event_category::EventCategory;
use chrono::NaiveTime;

/// Descriptive statistics over a set of time-of-day values.
///
/// `mode` ties resolve to the earliest time of day, so the result is
/// deterministic regardless of input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSummary {
    pub count: usize,
    pub min: NaiveTime,
    pub max: NaiveTime,
    pub median: NaiveTime,
    pub mode: NaiveTime,
    pub mean: NaiveTime,
}

/// Descriptive statistics over signed durations in minutes.
/// Negative values pass through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSummary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub median: i64,
    pub mean: i64,
}

/// Statistics for one group of day records. A `None` block means the group
/// had no usable values for that measure (e.g. leave days without clock
/// times), not that the group itself is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySummary {
    pub days: usize,
    pub clock_in: Option<TimeSummary>,
    pub clock_out: Option<TimeSummary>,
    pub office: Option<DurationSummary>,
}

/// Per-category statistics plus the ungrouped overall block.
#[derive(Debug, Clone)]
pub struct GroupedSummary {
    pub overall: CategorySummary,
    pub per_category: Vec<(EventCategory, CategorySummary)>,
}
