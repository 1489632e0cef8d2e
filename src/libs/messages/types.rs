#[derive(Debug, Clone)]
pub enum Message {
    // === SCHEDULE MESSAGES ===
    GeneratingSchedule {
        employees: usize,
        start: String,
        end: String,
    },
    ScheduleReady(usize),         // row count
    ScheduleSaved(String),        // output path
    NoEmployeesProvided,
    NonStandardTime(String),      // raw time value
    PreviewHeader(String, String), // start, end
    PreviewRowCount(usize),
    TrailingLogoutClamped(String), // end date

    // === INPUT MESSAGES ===
    ReadingEmployeesFrom(String), // path or "stdin"
    EmployeeFileReadFailed(String, String), // path, error
    GenerationFailed(String),     // error

    // === EXPORT MESSAGES ===
    ExportingRows(usize, String), // count, format

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError(String),
    ConfigModuleDefaults,
    ConfigModuleTelemetry,

    // === TELEMETRY MESSAGES ===
    TelemetryDisabled,
    TelemetryEventSent(String),           // event name
    TelemetryEventFailed(String, String), // event name, error
    TelemetryFlushTimedOut,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDefaultShiftStart,
    PromptDefaultShiftEnd,
    PromptDefaultNextDayLogout,
    PromptDefaultSkipWeekdays,
    PromptDefaultOutput,
    PromptTelemetryUrl,
}
