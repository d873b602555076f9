#[cfg(test)]
mod tests {
    use shiftgrid::libs::formatter::{format_duration_minutes, format_minute_offset, format_range};
    use shiftgrid::libs::timeline::TimeRange;

    #[test]
    fn test_format_minute_offset_same_day() {
        assert_eq!(format_minute_offset(0), "00:00");
        assert_eq!(format_minute_offset(570), "09:30");
        assert_eq!(format_minute_offset(1439), "23:59");
    }

    #[test]
    fn test_format_minute_offset_other_days() {
        assert_eq!(format_minute_offset(1440), "00:00 +1");
        assert_eq!(format_minute_offset(1860), "07:00 +1");
        assert_eq!(format_minute_offset(2 * 1440 + 5), "00:05 +2");
        assert_eq!(format_minute_offset(-30), "23:30 -1");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration_minutes(0), "00:00");
        assert_eq!(format_duration_minutes(95), "01:35");
        assert_eq!(format_duration_minutes(600), "10:00");
        assert_eq!(format_duration_minutes(-15), "00:00");
    }

    #[test]
    fn test_format_range() {
        let range = TimeRange { start_min: 1320, end_min: 1980 };
        assert_eq!(format_range(&range), "22:00 - 09:00 +1");
    }
}
