//! # Cabroster
//!
//! Expands an employee roster over a date range into the bulk-import CSV
//! expected by cab scheduling dashboards: one row per employee and day with
//! the expected login and/or logout time.
//!
//! ## Features
//!
//! - **Shift expansion**: same-day shifts and night shifts whose logout lands
//!   on the next morning
//! - **Skip days**: weekdays without a login, with owed logouts still emitted
//! - **Row merging**: exactly one row per employee and date
//! - **Export**: CSV import file or JSON, to a file or stdout
//! - **Defaults**: saved shift settings via `cabroster init`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cabroster::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
