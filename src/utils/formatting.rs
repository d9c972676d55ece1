//! Formatting utilities used by the statistics reports.

/// Round to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Seconds as "02h 05m 09s"; hours are not capped at 24.
pub fn secs2readable(secs: f64) -> String {
    let total = secs.max(0.0).round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Trip durations and birth years come in as floats; drop a zero fraction.
pub fn fmt_number(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

pub fn separator() -> String {
    "-".repeat(40)
}
