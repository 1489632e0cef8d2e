//! Serialization of merged shift rows for the scheduling dashboard.
//!
//! CSV is the import format: a fixed header followed by one line per
//! `(employee, date)`. JSON is offered for scripting and mirrors the same
//! columns. Output goes to a file, or to stdout when the path is `-`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cabroster::libs::export::{ExportFormat, Exporter};
//!
//! # fn run(rows: Vec<cabroster::libs::shift::ShiftRow>) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&rows)?;
//! # Ok(())
//! # }
//! ```

use super::shift::ShiftRow;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_STEM: &str = "moveinsync_schedule";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated import file with a header row.
    Csv,
    /// Pretty-printed array of records with the same columns.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One line of the import file. Field order is the column order.
#[derive(Debug, Serialize, PartialEq)]
pub struct ExportRow<'a> {
    #[serde(rename = "EmployeeId")]
    pub employee_id: &'a str,
    #[serde(rename = "LogIn")]
    pub log_in: &'a str,
    #[serde(rename = "LogOut")]
    pub log_out: &'a str,
    #[serde(rename = "LogInVenue")]
    pub log_in_venue: &'a str,
    #[serde(rename = "LogOutVenue")]
    pub log_out_venue: &'a str,
    #[serde(rename = "ShiftDate")]
    pub shift_date: String,
    #[serde(rename = "EditType")]
    pub edit_type: String,
}

impl<'a> From<&'a ShiftRow> for ExportRow<'a> {
    fn from(row: &'a ShiftRow) -> Self {
        ExportRow {
            employee_id: &row.employee_id,
            log_in: row.punch.login().unwrap_or(""),
            log_out: row.punch.logout().unwrap_or(""),
            log_in_venue: &row.login_venue,
            log_out_venue: &row.logout_venue,
            shift_date: row.formatted_date(),
            edit_type: row.edit_type.to_string(),
        }
    }
}

pub const HEADER: [&str; 7] = ["EmployeeId", "LogIn", "LogOut", "LogInVenue", "LogOutVenue", "ShiftDate", "EditType"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is `moveinsync_schedule.<ext>` in the
    /// working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_FILE_STEM, format.extension())));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn is_stdout(&self) -> bool {
        self.output_path == Path::new("-")
    }

    pub fn export(&self, rows: &[ShiftRow]) -> Result<()> {
        if self.is_stdout() {
            let stdout = io::stdout();
            return self.write_to(stdout.lock(), rows);
        }
        let file = File::create(&self.output_path)?;
        self.write_to(file, rows)
    }

    pub fn write_to<W: Write>(&self, writer: W, rows: &[ShiftRow]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => write_csv(writer, rows),
            ExportFormat::Json => write_json(writer, rows),
        }
    }
}

fn write_csv<W: Write>(writer: W, rows: &[ShiftRow]) -> Result<()> {
    // Header is written by hand so an empty schedule still carries it
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(ExportRow::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, rows: &[ShiftRow]) -> Result<()> {
    let records: Vec<ExportRow> = rows.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}
