#[derive(Debug, Clone)]
pub enum Message {
    // === GRID MESSAGES ===
    GridHeader { date: String, range: String, interval: i64 },
    NoShiftsForDate(String),
    ShiftRowsCount(usize),
    BreaksMergedCount(usize),

    // === ATTENDANCE MESSAGES ===
    AttendanceHeader(String),
    PeakAttendance { present: usize, at: String },

    // === SELECTION MESSAGES ===
    BreakRequestCreated { row_id: i64, start: String, end: String },
    SelectionArmed { row_id: i64, index: usize },
    SelectionIgnored { row_id: i64, index: usize },
    SelectionIncomplete,
    RowNotFound(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigPath(String),
    InvalidTimelineConfig(String),

    // === INPUT MESSAGES ===
    ShiftFileLoadFailed(String),
    BreakFileLoadFailed(String),
    InvalidDate(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportFailed(String),
}
