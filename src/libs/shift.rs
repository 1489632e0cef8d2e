//! Shift rows and the merge pass that collapses them.
//!
//! A [`ShiftRow`] describes what the cab scheduler should expect for one
//! employee on one calendar date. The generator in [`super::schedule`] emits
//! *partial* rows (a login and a logout for the same date arrive as two rows
//! when a night shift ends on the following morning); [`MergeRows::merge`]
//! folds them into exactly one row per `(employee_id, shift_date)` key.
//!
//! ## Usage
//!
//! ```rust
//! use cabroster::libs::shift::{EditType, MergeRows, Punch, ShiftRow};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let rows = vec![
//!     ShiftRow::new("E1", Punch::Login("22:30".into()), date, EditType::Add),
//!     ShiftRow::new("E1", Punch::Logout("08:00".into()), date, EditType::Add),
//! ];
//!
//! let merged = rows.merge();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].punch.login(), Some("22:30"));
//! assert_eq!(merged[0].punch.logout(), Some("08:00"));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Operation requested from the downstream scheduler for a row.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EditType {
    #[default]
    Add,
    Delete,
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditType::Add => write!(f, "ADD"),
            EditType::Delete => write!(f, "DELETE"),
        }
    }
}

/// Which cab events a row expects on its date.
///
/// A day on which neither event applies has no row at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Punch {
    Login(String),
    Logout(String),
    Both { login: String, logout: String },
}

impl Punch {
    pub fn login(&self) -> Option<&str> {
        match self {
            Punch::Login(login) | Punch::Both { login, .. } => Some(login),
            Punch::Logout(_) => None,
        }
    }

    pub fn logout(&self) -> Option<&str> {
        match self {
            Punch::Logout(logout) | Punch::Both { logout, .. } => Some(logout),
            Punch::Login(_) => None,
        }
    }

    /// Fills in whatever half `self` is missing from `other`.
    ///
    /// Values already present in `self` always win, which keeps the
    /// operation idempotent: absorbing a punch twice changes nothing.
    pub fn absorb(self, other: &Punch) -> Punch {
        match self {
            Punch::Login(login) => match other.logout() {
                Some(logout) => Punch::Both {
                    login,
                    logout: logout.to_string(),
                },
                None => Punch::Login(login),
            },
            Punch::Logout(logout) => match other.login() {
                Some(login) => Punch::Both {
                    login: login.to_string(),
                    logout,
                },
                None => Punch::Logout(logout),
            },
            both @ Punch::Both { .. } => both,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftRow {
    pub employee_id: String,
    pub punch: Punch,
    pub login_venue: String,
    pub logout_venue: String,
    pub shift_date: NaiveDate,
    pub edit_type: EditType,
}

impl ShiftRow {
    pub fn new(employee_id: &str, punch: Punch, shift_date: NaiveDate, edit_type: EditType) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            punch,
            login_venue: String::new(),
            logout_venue: String::new(),
            shift_date,
            edit_type,
        }
    }

    /// Shift date in the importer's `D/M/YYYY` form, without zero padding.
    pub fn formatted_date(&self) -> String {
        self.shift_date.format("%-d/%-m/%Y").to_string()
    }
}

pub trait MergeRows {
    fn merge(self) -> Vec<ShiftRow>;
}

impl MergeRows for Vec<ShiftRow> {
    /// Collapses rows sharing an `(employee_id, shift_date)` key.
    ///
    /// Edit type and venues come from the first row of each group. Output is
    /// ordered by the employee's first appearance, then by date.
    fn merge(self) -> Vec<ShiftRow> {
        let mut employee_rank: HashMap<String, usize> = HashMap::new();
        let mut slots: HashMap<(String, NaiveDate), usize> = HashMap::new();
        let mut merged: Vec<ShiftRow> = Vec::with_capacity(self.len());

        for row in self {
            let next_rank = employee_rank.len();
            employee_rank.entry(row.employee_id.clone()).or_insert(next_rank);

            let key = (row.employee_id.clone(), row.shift_date);
            match slots.get(&key) {
                Some(&index) => {
                    let existing = &mut merged[index];
                    existing.punch = existing.punch.clone().absorb(&row.punch);
                }
                None => {
                    slots.insert(key, merged.len());
                    merged.push(row);
                }
            }
        }

        merged.sort_by_key(|row| (employee_rank[&row.employee_id], row.shift_date));
        merged
    }
}
