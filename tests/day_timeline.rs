#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use shiftgrid::libs::day::{CellState, DayTimeline, TimelineEvent, TimelineOutput, ViewConfig};
    use shiftgrid::libs::record::{BreakRecord, BreakStatus, BreakType, ShiftRecord};
    use shiftgrid::libs::selection::{SelectionState, SlotAvailability, SlotStatus};
    use shiftgrid::libs::timeline::{SlotInterval, TimeRange, ViewMode, DEFAULT_RANGE};
    use test_context::{test_context, TestContext};

    struct DayContext {
        timeline: DayTimeline,
    }

    impl TestContext for DayContext {
        fn setup() -> Self {
            let shifts: Vec<ShiftRecord> = serde_json::from_value(json!([
                { "id": 8, "user_id": 2, "shift_type": "day", "start_time": "2024-01-10 09:00:00", "end_time": "2024-01-10 17:00:00" },
                { "id": 7, "user_id": 1, "shift_type": "day", "start_time": "2024-01-10 09:00:00", "end_time": "2024-01-10 17:00:00" },
                { "id": 20, "type": "break", "user_id": 2, "start_time": "2024-01-10 15:00:00", "end_time": "2024-01-10 15:15:00" }
            ]))
            .unwrap();
            let breaks: Vec<BreakRecord> = serde_json::from_value(json!([
                { "id": 100, "shift_detail_id": 7, "user_id": 1, "start_time": "2024-01-10 12:00:00", "end_time": "2024-01-10 12:30:00", "type": "planned", "status": "scheduled" }
            ]))
            .unwrap();

            DayContext {
                timeline: DayTimeline::new(shifts, breaks, day(), ViewConfig::default()),
            }
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    const NOON: usize = 16;

    #[test_context(DayContext)]
    #[test]
    fn test_rows_and_grid(ctx: &mut DayContext) {
        let timeline = &ctx.timeline;

        let ids: Vec<i64> = timeline.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![7, 8]);
        assert_eq!(timeline.grid().range(), TimeRange { start_min: 480, end_min: 1095 });
        assert_eq!(timeline.grid().slot_count(), 41);
        assert_eq!(timeline.merged_breaks().len(), 2);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_attendance_subtracts_breaks(ctx: &mut DayContext) {
        let attendance = ctx.timeline.attendance();

        assert_eq!(attendance.len(), 41);
        assert_eq!(attendance[0].present, 0);
        assert_eq!(attendance[4].present, 2);
        assert_eq!(attendance[NOON].work_count, 2);
        assert_eq!(attendance[NOON].break_count, 1);
        assert_eq!(attendance[NOON].present, 1);
        assert_eq!(attendance[28].present, 1);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_cell_states(ctx: &mut DayContext) {
        let rows = ctx.timeline.rows();

        assert_eq!(rows[0].cells[0], CellState::Outside);
        assert_eq!(rows[0].cells[4], CellState::Working);
        assert_eq!(
            rows[0].cells[NOON],
            CellState::OnBreak {
                status: BreakStatus::Scheduled,
                blocked: true
            }
        );
        assert_eq!(rows[1].cells[NOON], CellState::Working);
        assert_eq!(rows[0].bars.len(), 1);
        assert_eq!(rows[0].bars[0].span.start_index, 16.0);
        assert_eq!(rows[0].bars[0].minutes.start, Some(720));
        assert_eq!(rows[0].bars[0].minutes.end, Some(750));
        assert_eq!(rows[1].bars.len(), 1);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_planned_breaks_block_slots(ctx: &mut DayContext) {
        assert_eq!(ctx.timeline.slot_status(7, NOON), SlotStatus::Blocked);
        assert_eq!(ctx.timeline.slot_status(7, 0), SlotStatus::Outside);
        assert_eq!(ctx.timeline.slot_status(99, NOON), SlotStatus::Outside);

        let output = ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 7, index: NOON });
        assert!(output.is_none());
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_actual_breaks_may_overlap(ctx: &mut DayContext) {
        ctx.timeline.set_break_type(BreakType::Actual);
        assert_eq!(ctx.timeline.slot_status(7, NOON), SlotStatus::Open);

        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 7, index: NOON });
        let output = ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 7, index: NOON + 1 });

        match output {
            Some(TimelineOutput::CreateBreak(request)) => {
                assert_eq!(request.shift_detail_id, 7);
                assert_eq!(request.start_time, "2024-01-10 12:00:00");
                assert_eq!(request.end_time, "2024-01-10 12:30:00");
                assert_eq!(request.kind, BreakType::Actual);
            }
            other => panic!("expected a break request, got {:?}", other),
        }
    }

    #[test_context(DayContext)]
    #[test]
    fn test_pending_cells_follow_hover(ctx: &mut DayContext) {
        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 8, index: 4 });
        ctx.timeline.handle(TimelineEvent::SlotHovered { row_id: 8, index: 6 });

        let rows = ctx.timeline.rows();
        assert!(rows[1].cells[4..=6].iter().all(|c| *c == CellState::Pending));
        assert_eq!(rows[1].cells[7], CellState::Working);
        assert!(!rows[0].cells.contains(&CellState::Pending));
    }

    #[test_context(DayContext)]
    #[test]
    fn test_pointer_on_other_row_cancels_selection(ctx: &mut DayContext) {
        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 7, index: 6 });
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Armed { row_id: 7, start_index: 6 });

        assert!(ctx.timeline.handle(TimelineEvent::SlotHovered { row_id: 8, index: 6 }).is_none());
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
        assert!(!ctx.timeline.rows()[0].cells.contains(&CellState::Pending));
    }

    #[test_context(DayContext)]
    #[test]
    fn test_view_changes_reset_selection(ctx: &mut DayContext) {
        let armed = SelectionState::Armed { row_id: 8, start_index: 4 };

        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 8, index: 4 });
        ctx.timeline.replace_breaks(Vec::new());
        assert_eq!(ctx.timeline.selection().state(), armed);
        assert_eq!(ctx.timeline.merged_breaks().len(), 1);

        ctx.timeline.set_interval(SlotInterval::new(30).unwrap());
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
        assert_eq!(ctx.timeline.grid().interval().minutes(), 30);

        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 8, index: 2 });
        ctx.timeline.set_mode(ViewMode::Break);
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
        assert_eq!(ctx.timeline.grid().start_min(), 420);

        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 8, index: 4 });
        ctx.timeline.handle(TimelineEvent::Reset);
        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_date_change(ctx: &mut DayContext) {
        ctx.timeline.handle(TimelineEvent::SlotClicked { row_id: 8, index: 4 });
        ctx.timeline.set_date(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());

        assert_eq!(ctx.timeline.selection().state(), SelectionState::Idle);
        assert!(ctx.timeline.items().is_empty());
        assert!(ctx.timeline.rows().is_empty());
        assert_eq!(ctx.timeline.grid().range(), DEFAULT_RANGE);
    }

    #[test_context(DayContext)]
    #[test]
    fn test_row_click(ctx: &mut DayContext) {
        assert_eq!(ctx.timeline.handle(TimelineEvent::RowClicked(7)), Some(TimelineOutput::RowClicked(7)));
        assert_eq!(ctx.timeline.handle(TimelineEvent::RowClicked(20)), None);
    }

    #[test]
    fn test_empty_day() {
        let timeline = DayTimeline::new(Vec::new(), Vec::new(), day(), ViewConfig::default());

        assert_eq!(timeline.grid().range(), DEFAULT_RANGE);
        assert_eq!(timeline.grid().slot_count(), 36);
        assert!(timeline.attendance().iter().all(|a| a.present == 0));
    }
}
