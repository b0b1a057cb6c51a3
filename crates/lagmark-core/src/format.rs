/// Format an elapsed time in seconds for display.
///
/// Sub-second values render as whole milliseconds ("500 ms"), rounded half
/// away from zero. Values of one second or more render with three
/// fractional digits ("1.234 s").
pub fn format_duration(secs: f64) -> String {
    if secs < 1.0 {
        format!("{} ms", (secs * 1000.0).round() as i64)
    } else {
        format!("{:.3} s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_renders_as_millis() {
        assert_eq!(format_duration(0.5), "500 ms");
        assert_eq!(format_duration(0.25), "250 ms");
        assert_eq!(format_duration(0.0), "0 ms");
    }

    #[test]
    fn test_half_millisecond_rounds_away_from_zero() {
        assert_eq!(format_duration(0.0005), "1 ms");
        assert_eq!(format_duration(0.0004), "0 ms");
    }

    #[test]
    fn test_second_and_above_renders_with_three_digits() {
        assert_eq!(format_duration(1.5), "1.500 s");
        assert_eq!(format_duration(2.0), "2.000 s");
        assert_eq!(format_duration(12.3456), "12.346 s");
    }

    #[test]
    fn test_one_second_boundary_uses_seconds_branch() {
        assert_eq!(format_duration(1.0), "1.000 s");
        assert_eq!(format_duration(0.9999), "1000 ms");
    }
}
