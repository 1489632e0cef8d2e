use super::roster::RosterArgs;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        telemetry::{Telemetry, TelemetryEvent},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    roster: RosterArgs,
}

/// Prints the merged rows as a table instead of writing a file.
pub async fn cmd(args: PreviewArgs) -> Result<()> {
    let config = Config::read()?;
    let telemetry = Telemetry::spawn(config.telemetry.clone());
    telemetry.record(TelemetryEvent::Visit);

    let result = args.roster.resolve(&config.defaults.unwrap_or_default()).map(|request| {
        let rows = request.build();
        msg_print!(Message::PreviewHeader(request.start_date.to_string(), request.end_date.to_string()), true);
        View::rows(&rows);
        msg_print!(Message::PreviewRowCount(rows.len()));
    });

    telemetry.shutdown().await;
    result
}
