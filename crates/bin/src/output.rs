//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use rosette::User;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a signed-in user in the selected format.
pub fn print_user(user: &User, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("Username:  {}", user.username);
            println!("Email:     {}", user.email);
            println!("Id:        {}", user.id);
            println!("Avatar:    {}", user.avatar);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(user)?);
        }
    }
    Ok(())
}
