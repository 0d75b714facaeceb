use clap::Parser;
use bloglist::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Stats(args) => cli::stats::run(args).await,
        Command::Info(args) => cli::info::run(args).await,
        Command::CheckNumber(args) => cli::check_number::run(args),
        Command::Normalize(args) => cli::normalize::run(args),
    }
}
