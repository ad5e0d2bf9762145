//! Duration formatting for session summaries.

use chrono::Duration;

/// Format a duration as `"XhYm"`, truncating any sub-minute remainder.
///
/// Negative durations are a caller error and are not handled here.
#[must_use]
pub fn format_hm(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    format!("{hours}h{minutes}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hm() {
        assert_eq!(format_hm(Duration::minutes(130)), "2h10m");
        assert_eq!(format_hm(Duration::minutes(0)), "0h0m");
        assert_eq!(format_hm(Duration::minutes(59)), "0h59m");
        assert_eq!(format_hm(Duration::minutes(60)), "1h0m");
    }

    #[test]
    fn test_sub_minute_remainder_truncates() {
        assert_eq!(format_hm(Duration::seconds(59)), "0h0m");
        assert_eq!(format_hm(Duration::seconds(8 * 3600 + 30)), "8h0m");
    }
}
