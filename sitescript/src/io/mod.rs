//! I/O helpers for sitescript commands.

pub mod catalog;
pub mod config;
pub mod script_store;
