//! Store construction for the CLI.
//!
//! Every invocation is a fresh process, so the session lives in a JSON
//! file under the data directory and each command opens its own manager
//! over it.

use std::path::Path;
use std::sync::Arc;

use rosette::{SessionManager, auth::MockAuth, store::JsonFile};

/// File name of the session store inside the data directory.
pub const SESSION_FILE: &str = "session.json";

/// Open a session manager over the file-backed store in `data_dir`.
pub async fn open_session(data_dir: &Path) -> SessionManager {
    let path = data_dir.join(SESSION_FILE);
    tracing::debug!("Using session store at {}", path.display());
    let store = Arc::new(JsonFile::new(path));
    SessionManager::open(store, Arc::new(MockAuth::new())).await
}
