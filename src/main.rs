// src/main.rs
// MindSpace - chat relay server and terminal client

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so interactive commands keep stdout clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // After the subscriber, so .env problems are logged
    mindspace::config::load_dotenv();

    let cli = Cli::parse();

    match cli.command {
        None => cli::serve::run(cli.serve).await,
        Some(Commands::Serve(args)) => cli::serve::run(args).await,
        Some(Commands::Chat(args)) => cli::chat::run(args).await,
        Some(Commands::Assess { quiz }) => cli::assess::run(&quiz).await,
        Some(Commands::Breathe { cycles }) => cli::breathe::run(cycles).await,
        Some(Commands::Login(args)) => cli::account::login(&args),
        Some(Commands::Logout(args)) => cli::account::logout(&args),
        Some(Commands::Status(args)) => cli::account::status(&args),
        Some(Commands::Sos) => cli::sos::run().await,
        Some(Commands::Community { register }) => cli::account::community(register.as_deref()),
    }
}
