//! Formatting utilities used for CLI and export outputs.

/// "07h 30m" style rendering for durations, with an optional explicit sign.
pub fn mins_pretty(mins: i64, want_sign: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins < 0 {
        "-"
    } else if mins > 0 && want_sign {
        "+"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, hours, minutes)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
