//! Stable exit codes for sitescript CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid input script, config, catalog, or I/O error.
pub const INVALID: i32 = 1;
/// `sitescript associate` was given a site design id that does not exist.
pub const NOT_FOUND: i32 = 2;
