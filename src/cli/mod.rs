// src/cli/mod.rs
// Command-line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use mindspace::config;

pub mod account;
pub mod assess;
pub mod breathe;
pub mod chat;
pub mod serve;
pub mod sos;

#[derive(Parser)]
#[command(name = "mindspace")]
#[command(about = "MindSpace companion relay and terminal client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Relay options when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the chat relay server (default)
    Serve(ServeArgs),

    /// Chat with the companion through a running relay
    Chat(ChatArgs),

    /// Take a self-assessment quiz
    Assess {
        /// Quiz id or title (e.g. 0, stress-pulse, "Anxiety Matrix")
        quiz: String,
    },

    /// Guided breathing (In 4s, Hold 4s, Out 6s)
    Breathe {
        /// Number of cycles
        #[arg(short, long, default_value = "3")]
        cycles: u32,
    },

    /// Set the local login flag
    Login(StateArgs),

    /// Clear the local login flag
    Logout(StateArgs),

    /// Show the local login flag
    Status(StateArgs),

    /// Show emergency contacts
    Sos,

    /// Show live circles and the anonymous wall
    Community {
        /// Register for a live circle by id
        #[arg(long)]
        register: Option<String>,
    },
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = config::DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Gemini API key (server-side only)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Model identifier requests are pinned to
    #[arg(long, env = "MINDSPACE_MODEL", default_value = config::DEFAULT_MODEL)]
    pub model: String,

    /// Seconds to wait for the provider
    #[arg(
        long,
        env = "MINDSPACE_UPSTREAM_TIMEOUT_SECS",
        default_value_t = config::DEFAULT_UPSTREAM_TIMEOUT_SECS
    )]
    pub upstream_timeout: u64,
}

#[derive(Args, Clone)]
pub struct ChatArgs {
    /// Base URL of the relay
    #[arg(long, env = "MINDSPACE_API_URL", default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait for the relay
    #[arg(
        long,
        env = "MINDSPACE_CLIENT_TIMEOUT_SECS",
        default_value_t = config::DEFAULT_CLIENT_TIMEOUT_SECS
    )]
    pub timeout: u64,
}

#[derive(Args, Clone)]
pub struct StateArgs {
    /// Directory holding the local session flag (default: ~/.mindspace)
    #[arg(long, env = "MINDSPACE_STATE_DIR")]
    pub state_dir: Option<PathBuf>,
}

impl StateArgs {
    pub fn dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(config::default_state_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["mindspace", "assess", "stress-pulse"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Assess { ref quiz }) if quiz == "stress-pulse"
        ));

        let cli = Cli::try_parse_from(["mindspace", "breathe", "--cycles", "5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Breathe { cycles: 5 })));

        let cli = Cli::try_parse_from(["mindspace", "sos"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sos)));

        let cli = Cli::try_parse_from(["mindspace", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, 8080),
            _ => panic!("expected serve"),
        }
    }
}
