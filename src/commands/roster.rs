//! Roster arguments shared by `generate` and `preview`.
//!
//! Every argument is optional on the command line; omitted values fall back to
//! the saved [`ShiftDefaults`]. Resolving the arguments is the only place raw
//! user text turns into a [`ScheduleRequest`], so all parse errors surface
//! here, before any row is generated.

use crate::{
    libs::{
        config::ShiftDefaults,
        input::{self, parse_edit_type, parse_employee_ids, parse_range, parse_weekdays},
        messages::Message,
        schedule::{ScheduleRequest, TrailingLogout},
    },
    msg_info, msg_warning,
};
use anyhow::{anyhow, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Debug, Args, Default)]
pub struct RosterArgs {
    /// Employee ID; repeat the flag for several employees
    #[arg(long, value_name = "EMPLOYEE_ID")]
    pub ids: Vec<String>,

    /// File with one employee ID per line (`-` reads stdin)
    #[arg(long, value_name = "PATH")]
    pub ids_file: Option<PathBuf>,

    /// First shift date: `today`, `YYYY-MM-DD` or `D/M/YYYY`
    #[arg(long, default_value = "today")]
    pub from: String,

    /// Last shift date, inclusive
    #[arg(long, default_value = "today")]
    pub to: String,

    /// Shift start (HH:MM, 24hr)
    #[arg(long)]
    pub login: Option<String>,

    /// Shift end (HH:MM, 24hr)
    #[arg(long)]
    pub logout: Option<String>,

    /// Record the logout on the day after the login
    #[arg(long, overrides_with = "same_day_logout")]
    pub next_day_logout: bool,

    /// Record the logout on the login day, overriding a saved default
    #[arg(long, overrides_with = "next_day_logout")]
    pub same_day_logout: bool,

    /// Weekdays without shifts, e.g. `sat,sun`
    #[arg(long, value_name = "DAYS")]
    pub skip: Vec<String>,

    /// ADD or DELETE
    #[arg(long)]
    pub edit_type: Option<String>,

    /// Drop the logout that falls after the last date
    #[arg(long)]
    pub clamp: bool,
}

impl RosterArgs {
    /// Builds the request, filling gaps from `defaults`.
    pub fn resolve(&self, defaults: &ShiftDefaults) -> Result<ScheduleRequest> {
        let employee_ids = parse_employee_ids(&self.employee_text()?)?;
        let (start_date, end_date) = parse_range(&self.from, &self.to)?;

        let skip_weekdays = if self.skip.is_empty() {
            parse_weekdays(&defaults.skip_weekdays)?
        } else {
            parse_weekdays(&self.skip)?
        };

        let edit_type = match &self.edit_type {
            Some(text) => parse_edit_type(text)?,
            None => defaults.edit_type,
        };

        let next_day_logout = match (self.next_day_logout, self.same_day_logout) {
            (true, _) => true,
            (_, true) => false,
            _ => defaults.next_day_logout,
        };

        let trailing_logout = if self.clamp { TrailingLogout::Clamp } else { defaults.trailing_logout };

        Ok(ScheduleRequest {
            employee_ids,
            start_date,
            end_date,
            shift_start: shift_time(self.login.as_deref().unwrap_or(&defaults.shift_start)),
            shift_end: shift_time(self.logout.as_deref().unwrap_or(&defaults.shift_end)),
            next_day_logout,
            skip_weekdays,
            edit_type,
            trailing_logout,
        })
    }

    /// Newline-joined IDs from `--ids` flags followed by `--ids-file`.
    fn employee_text(&self) -> Result<String> {
        let mut text = self.ids.join("\n");
        if let Some(path) = &self.ids_file {
            let source = path.display().to_string();
            let contents = if path.as_os_str() == "-" {
                msg_info!(Message::ReadingEmployeesFrom("stdin".to_string()));
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            } else {
                msg_info!(Message::ReadingEmployeesFrom(source.clone()));
                fs::read_to_string(path)
            }
            .map_err(|e| anyhow!(Message::EmployeeFileReadFailed(source, e.to_string())))?;
            text.push('\n');
            text.push_str(&contents);
        }
        Ok(text)
    }
}

/// Zero-pads well-formed times and passes anything else through.
fn shift_time(raw: &str) -> String {
    match input::normalize_time(raw) {
        Some(time) => time,
        None => {
            msg_warning!(Message::NonStandardTime(raw.to_string()));
            raw.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use std::collections::HashSet;

    fn args() -> RosterArgs {
        RosterArgs {
            ids: vec!["E1".to_string(), " E2 ".to_string()],
            from: "2024-01-05".to_string(),
            to: "2024-01-08".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn omitted_values_come_from_defaults() {
        let defaults = ShiftDefaults {
            next_day_logout: true,
            skip_weekdays: vec!["sat".to_string(), "sun".to_string()],
            ..Default::default()
        };
        let request = args().resolve(&defaults).unwrap();
        assert_eq!(request.employee_ids, vec!["E1", "E2"]);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(request.shift_start, "22:30");
        assert!(request.next_day_logout);
        assert_eq!(request.skip_weekdays, HashSet::from([Weekday::Sat, Weekday::Sun]));
    }

    #[test]
    fn flags_override_defaults() {
        let defaults = ShiftDefaults {
            next_day_logout: true,
            ..Default::default()
        };
        let roster = RosterArgs {
            login: Some("9:15".to_string()),
            same_day_logout: true,
            clamp: true,
            edit_type: Some("delete".to_string()),
            ..args()
        };
        let request = roster.resolve(&defaults).unwrap();
        assert_eq!(request.shift_start, "09:15");
        assert!(!request.next_day_logout);
        assert_eq!(request.trailing_logout, TrailingLogout::Clamp);
        assert_eq!(request.edit_type, crate::libs::shift::EditType::Delete);
    }

    #[test]
    fn ids_file_is_appended_after_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        fs::write(&path, "E3\n\nE4\n").unwrap();
        let roster = RosterArgs {
            ids_file: Some(path),
            ..args()
        };
        let request = roster.resolve(&ShiftDefaults::default()).unwrap();
        assert_eq!(request.employee_ids, vec!["E1", "E2", "E3", "E4"]);
    }

    #[test]
    fn missing_ids_file_is_an_error() {
        let roster = RosterArgs {
            ids_file: Some(PathBuf::from("/nonexistent/ids.txt")),
            ..args()
        };
        assert!(roster.resolve(&ShiftDefaults::default()).is_err());
    }
}
