use chrono::NaiveDate;

/// Parse a day-first date. The configured format uses "/" but exported
/// timesheets show up with "-" as well, so the dashed variant of the same
/// format is accepted too.
pub fn parse_day_first(s: &str, format: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, format) {
        return Some(d);
    }
    let dashed = format.replace('/', "-");
    if dashed != format {
        return NaiveDate::parse_from_str(s, &dashed).ok();
    }
    None
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
