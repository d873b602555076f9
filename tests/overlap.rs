#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use shiftgrid::libs::overlap::{break_visual_span, is_user_on_break_in_slot, merge_breaks, slot_attendance, BreakOverlap};
    use shiftgrid::libs::record::{BreakRecord, BreakStatus};
    use shiftgrid::libs::shift::{build_items, Item};
    use shiftgrid::libs::timeline::{Slot, SlotInterval, TimeRange, TimelineGrid};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn brk(id: Option<i64>, user: Option<i64>, start: &str, end: &str) -> BreakRecord {
        BreakRecord {
            id,
            user_id: user,
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..Default::default()
        }
    }

    fn two_shifts() -> Vec<Item> {
        let records = serde_json::from_value::<Vec<_>>(json!([
            { "id": 7, "user_id": 1, "start_time": "2024-01-10 09:00", "end_time": "2024-01-10 17:00" },
            { "id": 8, "user_id": 2, "start_time": "2024-01-10 09:00", "end_time": "2024-01-10 17:00" }
        ]))
        .unwrap();
        build_items(&records, day())
    }

    fn slot_at(index: usize, start: i64) -> Slot {
        Slot { index, start, end: start + 15 }
    }

    #[test]
    fn test_merge_keeps_first_record_of_each_identity() {
        let mut listed = brk(Some(1), Some(1), "2024-01-10 12:00", "2024-01-10 12:30");
        listed.status = BreakStatus::Actual;
        let embedded = brk(Some(1), Some(1), "2024-01-10 13:00", "2024-01-10 13:30");
        let other = brk(Some(2), Some(2), "2024-01-10 13:00", "2024-01-10 13:30");

        let merged = merge_breaks(&[listed.clone()], &[embedded, other.clone()]);
        assert_eq!(merged, vec![listed, other]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let breaks = vec![
            brk(Some(1), None, "2024-01-10 12:00", "2024-01-10 12:30"),
            brk(None, None, "2024-01-10 14:00", "2024-01-10 14:15"),
            brk(None, None, "2024-01-10 14:00", "2024-01-10 14:15"),
        ];
        let merged = merge_breaks(&breaks, &[]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merge_breaks(&merged, &merged), merged);
    }

    #[test]
    fn test_record_id_and_shift_detail_id_do_not_collide() {
        let by_id = brk(Some(5), None, "2024-01-10 12:00", "2024-01-10 12:30");
        let by_shift = BreakRecord {
            shift_detail_id: Some(5),
            ..brk(None, None, "2024-01-10 13:00", "2024-01-10 13:30")
        };
        assert_eq!(merge_breaks(&[by_id, by_shift], &[]).len(), 2);
    }

    #[test]
    fn test_same_person_is_counted_once() {
        let items = two_shifts();
        let mut actual = brk(Some(2), Some(1), "2024-01-10 12:05", "2024-01-10 12:20");
        actual.status = BreakStatus::Actual;
        let merged = vec![brk(Some(1), Some(1), "2024-01-10 12:00", "2024-01-10 12:30"), actual];

        let overlap = BreakOverlap::new(&merged, day());
        let attendance = overlap.attendance(&slot_at(16, 720), &items);

        assert_eq!(attendance.work_count, 2);
        assert_eq!(attendance.break_count, 1);
        assert_eq!(attendance.present, 1);
    }

    #[test]
    fn test_present_never_goes_below_zero() {
        let merged = vec![
            brk(Some(1), Some(1), "2024-01-10 12:00", "2024-01-10 12:30"),
            brk(Some(2), Some(2), "2024-01-10 12:00", "2024-01-10 12:30"),
        ];
        assert_eq!(slot_attendance(&slot_at(0, 720), &[], &merged, day()), 0);
    }

    #[test]
    fn test_break_with_unparseable_end_is_ignored() {
        let items = two_shifts();
        let merged = vec![brk(Some(1), Some(1), "2024-01-10 12:00", "later")];
        assert_eq!(slot_attendance(&slot_at(16, 720), &items, &merged, day()), 2);
    }

    #[test]
    fn test_user_on_break_in_slot() {
        let merged = vec![brk(Some(1), Some(1), "2024-01-10 12:00", "2024-01-10 12:30")];

        assert!(is_user_on_break_in_slot(1, &slot_at(17, 735), &merged, day()));
        assert!(!is_user_on_break_in_slot(1, &slot_at(18, 750), &merged, day()));
        assert!(!is_user_on_break_in_slot(2, &slot_at(17, 735), &merged, day()));
    }

    #[test]
    fn test_attendance_series_covers_every_slot() {
        let items = two_shifts();
        let grid = TimelineGrid::from_range(TimeRange { start_min: 480, end_min: 1095 }, SlotInterval::default());
        let merged = vec![brk(Some(1), Some(1), "2024-01-10 12:00", "2024-01-10 12:30")];

        let series = BreakOverlap::new(&merged, day()).attendance_series(&grid, &items);
        assert_eq!(series.len(), grid.slot_count());
        assert_eq!(series[0].work_count, 0);
        assert_eq!(series[4].present, 2);
        assert_eq!(series[16].present, 1);
        assert_eq!(series[18].present, 2);
    }

    #[test]
    fn test_row_break_matches_user_or_shift() {
        let items = two_shifts();
        let by_shift = BreakRecord {
            shift_detail_id: Some(8),
            ..brk(Some(3), None, "2024-01-10 12:00", "2024-01-10 12:30")
        };
        let overlap = BreakOverlap::new(&[by_shift], day());
        let slot = slot_at(16, 720);

        assert!(overlap.row_break_in(&items[0], &slot).is_none());
        assert!(overlap.row_break_in(&items[1], &slot).is_some());
    }

    #[test]
    fn test_visual_span_is_fractional_and_clipped() {
        let interval = SlotInterval::default();

        let inside = break_visual_span(&brk(None, None, "2024-01-10 09:00", "2024-01-10 09:20"), 480, interval, day()).unwrap();
        assert_eq!(inside.start_index, 4.0);
        assert!((inside.end_index - 16.0 / 3.0).abs() < 1e-9);

        let early = break_visual_span(&brk(None, None, "2024-01-10 07:30", "2024-01-10 08:30"), 480, interval, day()).unwrap();
        assert_eq!(early.start_index, 0.0);
        assert_eq!(early.end_index, 2.0);
        assert_eq!(early.width(), 2.0);

        assert!(break_visual_span(&brk(None, None, "2024-01-10 09:00", "soon"), 480, interval, day()).is_none());
    }
}
