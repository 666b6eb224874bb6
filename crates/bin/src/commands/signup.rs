//! Signup command - create an account and sign in as it.

use std::path::Path;

use crate::cli::SignupArgs;
use crate::output::{OutputFormat, print_user};
use crate::store::open_session;

/// Run the signup command
pub async fn run(
    args: &SignupArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(data_dir).await;
    let user = session
        .signup(&args.email, &args.password, &args.username)
        .await?;

    if format == OutputFormat::Human {
        println!("Account created.");
    }
    print_user(&user, format)
}
