use chrono::DateTime;

// Month names come from chrono's fixed English table, so output does not
// depend on the host locale.
const DISPLAY_PATTERN: &str = "%b %-d, %Y @ %H:%M";

/// Formats `epoch_millis` as e.g. `Jul 2, 2013 @ 21:57`, always in GMT.
///
/// Instants chrono cannot represent produce an empty string.
pub fn format_display_date(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(instant) => instant.format(DISPLAY_PATTERN).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_instant_in_gmt() {
        assert_eq!(format_display_date(1_372_802_220_000), "Jul 2, 2013 @ 21:57");
    }

    #[test]
    fn day_is_not_zero_padded_but_hours_are() {
        assert_eq!(format_display_date(1_707_454_980_000), "Feb 9, 2024 @ 05:03");
        assert_eq!(format_display_date(0), "Jan 1, 1970 @ 00:00");
    }

    #[test]
    fn output_ignores_host_time_zone() {
        // 23:30 GMT is already the next day in Tokyo and still earlier in Los Angeles.
        let millis = 1_372_807_800_000;
        std::env::set_var("TZ", "America/Los_Angeles");
        let pacific = format_display_date(millis);
        std::env::set_var("TZ", "Asia/Tokyo");
        let tokyo = format_display_date(millis);
        std::env::remove_var("TZ");

        assert_eq!(pacific, tokyo);
        assert_eq!(tokyo, "Jul 2, 2013 @ 23:30");
    }

    #[test]
    fn sub_minute_precision_is_dropped() {
        assert_eq!(
            format_display_date(1_372_802_220_000 + 59_999),
            "Jul 2, 2013 @ 21:57"
        );
    }

    #[test]
    fn negative_millis_format_before_epoch() {
        assert_eq!(format_display_date(-60_000), "Dec 31, 1969 @ 23:59");
    }

    #[test]
    fn unrepresentable_instant_is_empty() {
        assert_eq!(format_display_date(i64::MAX), "");
        assert_eq!(format_display_date(i64::MIN), "");
    }
}
