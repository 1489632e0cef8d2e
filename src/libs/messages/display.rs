//! Display implementation for cabroster messages.
//!
//! All user-facing text lives in this one match so that wording stays
//! consistent between the generate, preview and init commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SCHEDULE MESSAGES ===
            Message::GeneratingSchedule { employees, start, end } => {
                format!("Generating schedule for {} employee(s) from {} to {}", employees, start, end)
            }
            Message::ScheduleReady(count) => format!("Schedule ready: {} row(s)", count),
            Message::ScheduleSaved(path) => format!("Schedule saved to {}", path),
            Message::NoEmployeesProvided => "No employee IDs provided, the file will only contain the header".to_string(),
            Message::NonStandardTime(value) => format!("'{}' is not an HH:MM time, it will be exported as entered", value),
            Message::PreviewHeader(start, end) => format!("Shift rows from {} to {}", start, end),
            Message::PreviewRowCount(count) => format!("{} row(s)", count),
            Message::TrailingLogoutClamped(end) => format!("Logouts falling after {} are omitted", end),

            // === INPUT MESSAGES ===
            Message::ReadingEmployeesFrom(source) => format!("Reading employee IDs from {}", source),
            Message::EmployeeFileReadFailed(path, error) => format!("Failed to read employee IDs from {}: {}", path, error),
            Message::GenerationFailed(error) => format!("Error: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingRows(count, format) => format!("Exporting {} row(s) as {}", count, format),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigModuleDefaults => "Shift defaults".to_string(),
            Message::ConfigModuleTelemetry => "Telemetry".to_string(),

            // === TELEMETRY MESSAGES ===
            Message::TelemetryDisabled => "Telemetry endpoint not configured, events are dropped".to_string(),
            Message::TelemetryEventSent(event) => format!("Telemetry event '{}' sent", event),
            Message::TelemetryEventFailed(event, error) => format!("Telemetry event '{}' failed: {}", event, error),
            Message::TelemetryFlushTimedOut => "Telemetry did not finish in time, pending events dropped".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDefaultShiftStart => "Default shift start (HH:MM, 24hr)".to_string(),
            Message::PromptDefaultShiftEnd => "Default shift end (HH:MM, 24hr)".to_string(),
            Message::PromptDefaultNextDayLogout => "Does the shift end on the next day?".to_string(),
            Message::PromptDefaultSkipWeekdays => "Weekdays without shifts".to_string(),
            Message::PromptDefaultOutput => "Default output file".to_string(),
            Message::PromptTelemetryUrl => "Telemetry endpoint URL (empty to disable)".to_string(),
        };

        write!(f, "{}", text)
    }
}
