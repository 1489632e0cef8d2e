pub mod generate;
pub mod init;
pub mod preview;
pub mod roster;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Generate the shift import file")]
    Generate(generate::GenerateArgs),
    #[command(about = "Print the shift rows without writing a file")]
    Preview(preview::PreviewArgs),
    #[command(about = "Configure roster defaults and telemetry")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Generate(args) => generate::cmd(args).await,
            Commands::Preview(args) => preview::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
        }
    }
}
