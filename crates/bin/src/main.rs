use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod store;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing. Logs go to stderr so JSON output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rosette=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Login(args) => commands::login::run(args, &cli.data_dir, cli.format).await,
        Commands::Signup(args) => commands::signup::run(args, &cli.data_dir, cli.format).await,
        Commands::Logout => commands::logout::run(&cli.data_dir, cli.format).await,
        Commands::Whoami => commands::whoami::run(&cli.data_dir, cli.format).await,
    }
}
