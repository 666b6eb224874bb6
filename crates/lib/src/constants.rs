//! Constants used throughout the rosette library.
//!
//! This module provides central definitions for reserved storage keys and
//! default resource references shared between the session manager and its
//! collaborators.

/// Storage key under which the current session's user record is persisted.
pub const SESSION_USER_KEY: &str = "user";

/// Avatar reference assigned to accounts that have not set one.
pub const DEFAULT_AVATAR: &str = "/placeholder.svg";
