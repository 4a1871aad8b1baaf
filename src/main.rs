use std::process::ExitCode;

use clap::Parser;
use user_registry::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await.map(|_| ExitCode::SUCCESS),
        Command::Validate(args) => cli::validate::run(args),
    }
}
