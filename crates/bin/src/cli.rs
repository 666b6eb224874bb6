//! CLI argument definitions for the rosette binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Roses session CLI
#[derive(Parser, Debug)]
#[command(name = "rosette")]
#[command(about = "Rosette: sign in, sign out, and inspect the Roses session")]
#[command(version)]
pub struct Cli {
    /// Data directory holding the session file
    #[arg(
        short = 'D',
        long,
        default_value = ".rosette",
        env = "ROSETTE_DATA_DIR",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "human",
        env = "ROSETTE_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to an existing account
    Login(LoginArgs),
    /// Create an account and sign in as it
    Signup(SignupArgs),
    /// Sign out and forget the remembered session
    Logout,
    /// Show who is currently signed in
    Whoami,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Email address of the account
    #[arg(short, long, env = "ROSETTE_EMAIL")]
    pub email: String,

    /// Password for the account
    #[arg(short, long, env = "ROSETTE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the signup command
#[derive(clap::Args, Debug)]
pub struct SignupArgs {
    /// Email address for the new account
    #[arg(short, long, env = "ROSETTE_EMAIL")]
    pub email: String,

    /// Password for the new account
    #[arg(short, long, env = "ROSETTE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Display name for the new account
    #[arg(short, long, env = "ROSETTE_USERNAME")]
    pub username: String,
}
