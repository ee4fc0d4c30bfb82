/// Render seconds as `MM:SS`, or `HH:MM:SS` once there is at least one hour.
///
/// Every unit is truncated toward zero. Negative and non-finite input renders
/// as `00:00`.
pub fn format_time(total_seconds: f64) -> String {
    let value = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds
    } else {
        0.0
    };
    let s = (value % 60.0).trunc() as u64;
    let m = ((value / 60.0) % 60.0).trunc() as u64;
    let h = ((value / 3600.0) % 60.0).trunc() as u64;

    if h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// Truncate (not round) to two decimal digits.
pub fn truncate2(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Completed fraction of `position` over `duration`; zero when the duration
/// is unknown or not positive.
pub(super) fn completed_fraction(position: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d > 0.0 => truncate2(position / d).clamp(0.0, 1.0),
        _ => 0.0,
    }
}
