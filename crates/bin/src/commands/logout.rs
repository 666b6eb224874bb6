//! Logout command - sign out and clear the remembered session.

use std::path::Path;

use crate::output::OutputFormat;
use crate::store::open_session;

/// Run the logout command
pub async fn run(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(data_dir).await;
    let previous = session.current_user();
    session.logout().await;

    match format {
        OutputFormat::Human => match previous {
            Some(user) => println!("Signed out {}.", user.username),
            None => println!("Nobody was signed in."),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "was_authenticated": previous.is_some(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
