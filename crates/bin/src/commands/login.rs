//! Login command - authenticate and remember the session.

use std::path::Path;

use crate::cli::LoginArgs;
use crate::output::{OutputFormat, print_user};
use crate::store::open_session;

/// Run the login command
pub async fn run(
    args: &LoginArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(data_dir).await;
    let user = session.login(&args.email, &args.password).await?;

    if format == OutputFormat::Human {
        println!("Signed in.");
    }
    print_user(&user, format)
}
