//! Whoami command - show the current session.

use std::path::Path;

use crate::output::{OutputFormat, print_user};
use crate::store::open_session;

/// Run the whoami command
pub async fn run(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(data_dir).await;
    let current = session.current_user();

    match format {
        OutputFormat::Human => match current {
            Some(user) => print_user(&user, format)?,
            None => println!("Not signed in."),
        },
        OutputFormat::Json => {
            let value = match &current {
                Some(user) => serde_json::json!({ "authenticated": true, "user": user }),
                None => serde_json::json!({ "authenticated": false }),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
