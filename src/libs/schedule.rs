//! Expansion of a roster request into shift rows.
//!
//! The generator walks every employee across the requested date range (plus
//! one trailing day, since a night shift started on the last day ends on the
//! next morning) and decides, per calendar day, whether the scheduler should
//! expect a login, a logout, both, or nothing.
//!
//! ## Rules
//!
//! - A **working day** is a day inside `start_date..=end_date` whose weekday
//!   is not in `skip_weekdays`.
//! - Same-day shifts: each working day yields one row with both punches.
//! - Next-day logout: each working day yields a login; each day that follows
//!   a working day yields a logout, whether or not it is itself worked.
//!   Skip days therefore suppress logins, never a logout that is owed.
//!
//! ## Usage
//!
//! ```rust
//! use cabroster::libs::schedule::ScheduleRequest;
//! use cabroster::libs::shift::EditType;
//! use chrono::NaiveDate;
//!
//! let request = ScheduleRequest {
//!     employee_ids: vec!["E1".into()],
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//!     shift_start: "22:30".into(),
//!     shift_end: "08:00".into(),
//!     next_day_logout: true,
//!     skip_weekdays: Default::default(),
//!     edit_type: EditType::Add,
//!     trailing_logout: Default::default(),
//! };
//!
//! assert_eq!(request.build().len(), 4);
//! ```

use super::shift::{EditType, MergeRows, Punch, ShiftRow};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What happens to the logout owed by the last working day of the range.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrailingLogout {
    /// Emit it on the following calendar day, past `end_date`.
    #[default]
    Emit,
    /// Drop every row dated after `end_date`.
    Clamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub employee_ids: Vec<String>,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    pub shift_start: String,
    pub shift_end: String,
    pub next_day_logout: bool,
    pub skip_weekdays: HashSet<Weekday>,
    pub edit_type: EditType,
    pub trailing_logout: TrailingLogout,
}

impl ScheduleRequest {
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date && !self.skip_weekdays.contains(&date.weekday())
    }

    /// Calendar days covered by the request, start through end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take_while({
            let end = self.end_date;
            move |date| *date <= end
        })
    }

    /// Punches owed on `date`, before merging.
    fn punches_on(&self, date: NaiveDate) -> Vec<Punch> {
        let worked = self.is_working_day(date);

        if !self.next_day_logout {
            if !worked {
                return vec![];
            }
            return vec![Punch::Both {
                login: self.shift_start.clone(),
                logout: self.shift_end.clone(),
            }];
        }

        let mut punches = Vec::with_capacity(2);
        if worked {
            punches.push(Punch::Login(self.shift_start.clone()));
        }
        if self.is_working_day(date - Duration::days(1)) {
            punches.push(Punch::Logout(self.shift_end.clone()));
        }
        punches
    }

    /// Emits the partial rows for every employee and day, unmerged.
    pub fn generate(&self) -> Vec<ShiftRow> {
        let trailing_day = match self.trailing_logout {
            TrailingLogout::Emit => Some(self.end_date + Duration::days(1)),
            TrailingLogout::Clamp => None,
        };

        let mut rows = vec![];
        for employee_id in &self.employee_ids {
            for date in self.days().chain(trailing_day) {
                for punch in self.punches_on(date) {
                    rows.push(ShiftRow::new(employee_id, punch, date, self.edit_type));
                }
            }
        }
        rows
    }

    /// Generates and merges: one row per `(employee_id, shift_date)`.
    pub fn build(&self) -> Vec<ShiftRow> {
        self.generate().merge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(next_day_logout: bool) -> ScheduleRequest {
        ScheduleRequest {
            employee_ids: vec!["E1".to_string()],
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            shift_start: "22:30".to_string(),
            shift_end: "08:00".to_string(),
            next_day_logout,
            skip_weekdays: HashSet::new(),
            edit_type: EditType::Add,
            trailing_logout: TrailingLogout::Emit,
        }
    }

    #[test]
    fn single_day_same_day_shift() {
        let rows = request(false).build();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].punch.login(), Some("22:30"));
        assert_eq!(rows[0].punch.logout(), Some("08:00"));
    }

    #[test]
    fn single_day_next_day_logout() {
        let rows = request(true).build();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].punch, Punch::Login("22:30".into()));
        assert_eq!(rows[1].punch, Punch::Logout("08:00".into()));
        assert_eq!(rows[1].shift_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn generate_emits_partials_before_merge() {
        let mut req = request(true);
        req.end_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        // day 1 login, day 2 login + logout, day 3 logout
        assert_eq!(req.generate().len(), 4);
        assert_eq!(req.build().len(), 3);
    }

    #[test]
    fn clamp_stops_at_end_date() {
        let mut req = request(true);
        req.trailing_logout = TrailingLogout::Clamp;
        let rows = req.generate();
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|row| row.shift_date <= req.end_date));
    }

    #[test]
    fn days_are_inclusive() {
        let mut req = request(false);
        req.end_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(req.days().count(), 31);
    }
}
