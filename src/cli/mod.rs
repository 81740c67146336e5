use anyhow::Result;
use clap::{Args, Parser, Subcommand};

pub mod serve;
pub mod tools;

use crate::core::AppConfig;

#[derive(Args, Debug, PartialEq)]
pub struct ServeArgs {
    /// Set the server host address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Set the server port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the API server (default)
    Serve(ServeArgs),
    /// Print the MCP tool manifest as JSON
    Tools {},
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,
}

pub async fn run() -> Result<()> {
    // Values already in the environment win over .env
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Tools {}) => tools::run(),
        Some(Command::Serve(serve_args)) => serve(serve_args).await,
        None => serve(args.serve).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let config = AppConfig::from_env()?;
    serve::run(args.host, args.port, config).await
}
