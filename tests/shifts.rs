#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use shiftgrid::libs::record::ShiftRecord;
    use shiftgrid::libs::shift::{build_items, compare_items, Item};
    use std::cmp::Ordering;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn shift(value: serde_json::Value) -> ShiftRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_night_shift_reaches_into_next_day() {
        let record = shift(json!({
            "id": 1,
            "start_time": "2024-01-10 23:00:00",
            "end_time": "2024-01-11 07:00:00",
            "shift_type": "night"
        }));
        let item = Item::new(record, day());

        assert_eq!(item.s_min(), Some(1380));
        assert_eq!(item.e_min(), Some(1860));
        assert!(item.covers(1800, 1815));
        assert!(!item.covers(1860, 1875));
    }

    #[test]
    fn test_only_work_entries_of_the_selected_day_become_rows() {
        let records = vec![
            shift(json!({ "id": 1, "start_time": "2024-01-10 09:00", "end_time": "2024-01-10 17:00" })),
            shift(json!({ "id": 2, "start_time": "2024-01-09 22:00", "end_time": "2024-01-10 06:00" })),
            shift(json!({ "id": 3, "type": "break", "start_time": "2024-01-10 12:00", "end_time": "2024-01-10 12:30" })),
            shift(json!({ "id": 4, "start_time": "10:00", "end_time": "18:00", "date": "2024-01-10" })),
            shift(json!({ "id": 5, "end_time": "2024-01-10 18:00" })),
        ];

        let items = build_items(&records, day());
        let mut ids: Vec<i64> = items.iter().map(Item::id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 4]);

        let time_only = items.iter().find(|i| i.id() == 4).unwrap();
        assert_eq!(time_only.s_min(), Some(600));
        assert_eq!(time_only.e_min(), Some(1080));
    }

    #[test]
    fn test_rows_are_ordered_by_type_then_user_then_start() {
        let records = vec![
            shift(json!({ "id": 1, "shift_type": "night", "user_id": 1, "start_time": "2024-01-10 22:00" })),
            shift(json!({ "id": 2, "shift_type": "day", "start_time": "2024-01-10 08:00" })),
            shift(json!({ "id": 3, "shift_type": "day", "user_id": 9, "start_time": "2024-01-10 08:00" })),
            shift(json!({ "id": 4, "user_id": 1, "start_time": "2024-01-10 12:00" })),
            shift(json!({ "id": 5, "shift_type": "day", "user_id": 2, "start_time": "2024-01-10 10:00" })),
            shift(json!({ "id": 6, "shift_type": "day", "user_id": 2, "start_time": "2024-01-10 07:00" })),
        ];

        let ids: Vec<i64> = build_items(&records, day()).iter().map(Item::id).collect();
        assert_eq!(ids, vec![6, 5, 3, 2, 4, 1]);
    }

    #[test]
    fn test_record_id_breaks_remaining_ties() {
        let a = Item::new(shift(json!({ "id": 10, "start_time": "2024-01-10 08:00" })), day());
        let b = Item::new(shift(json!({ "id": 11, "start_time": "2024-01-10 08:00" })), day());

        assert_eq!(compare_items(&a, &b), Ordering::Less);
        assert_eq!(compare_items(&b, &a), Ordering::Greater);
        assert_eq!(compare_items(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_raw_times_are_kept() {
        let item = Item::new(shift(json!({ "id": 1, "start_time": "2024-01-10 09:00", "user": { "id": 3 } })), day());
        assert_eq!(item.start_raw(), "2024-01-10 09:00");
        assert_eq!(item.end_raw(), "");
        assert_eq!(item.e_min(), None);
        assert_eq!(item.user_id(), Some(3));
    }
}
