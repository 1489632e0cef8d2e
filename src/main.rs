use cabroster::{
    commands::Cli,
    libs::messages::{macros::is_debug_mode, Message},
    msg_error,
};
use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cabroster=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::GenerationFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
