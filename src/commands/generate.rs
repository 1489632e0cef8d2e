//! Schedule generation command.
//!
//! Builds the roster request, expands and merges it into one row per
//! employee and date, and writes the import file. Telemetry events are
//! handed to the background observer and never affect the result.
//!
//! ```bash
//! # Night shift for two employees, Monday to Friday
//! cabroster generate --ids E1 --ids E2 --from 2024-01-01 --to 2024-01-31 \
//!     --login 22:30 --logout 08:00 --next-day-logout --skip sat,sun
//!
//! # IDs from a file, written to stdout
//! cabroster generate --ids-file ids.txt --from today --to today --output -
//! ```

use super::roster::RosterArgs;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        schedule::TrailingLogout,
        telemetry::{Telemetry, TelemetryEvent},
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    roster: RosterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, `-` for stdout (default: moveinsync_schedule.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: GenerateArgs) -> Result<()> {
    let config = Config::read()?;
    let telemetry = Telemetry::spawn(config.telemetry.clone());
    telemetry.record(TelemetryEvent::Visit);

    let result = run(&args, &config, &telemetry);

    telemetry.shutdown().await;
    result
}

fn run(args: &GenerateArgs, config: &Config, telemetry: &Telemetry) -> Result<()> {
    let defaults = config.defaults.clone().unwrap_or_default();
    let request = args.roster.resolve(&defaults)?;

    if request.employee_ids.is_empty() {
        msg_warning!(Message::NoEmployeesProvided);
    }
    msg_info!(Message::GeneratingSchedule {
        employees: request.employee_ids.len(),
        start: request.start_date.to_string(),
        end: request.end_date.to_string(),
    });
    if request.trailing_logout == TrailingLogout::Clamp && request.next_day_logout {
        msg_info!(Message::TrailingLogoutClamped(request.end_date.to_string()));
    }

    let rows = request.build();
    msg_info!(Message::ExportingRows(rows.len(), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output.clone().or(defaults.output));
    exporter.export(&rows)?;
    telemetry.record(TelemetryEvent::Download);

    if exporter.is_stdout() {
        msg_success!(Message::ScheduleReady(rows.len()));
    } else {
        msg_success!(Message::ScheduleSaved(exporter.output_path().display().to_string()));
    }
    Ok(())
}
