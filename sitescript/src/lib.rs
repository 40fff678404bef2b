//! Turn a list's site script into a filtered, reusable provisioning script.
//!
//! The crate takes the raw site script content generated for a list (a tree
//! of typed actions), drops the action categories the operator opted out of,
//! and exports or stores the result. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (verb policy, recursive action
//!   filtering, document transform). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, script files, tenant
//!   catalog).
//!
//! Orchestration modules ([`export`], [`publish`], [`associate`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod associate;
pub mod core;
pub mod exit_codes;
pub mod export;
pub mod io;
pub mod logging;
pub mod publish;
pub mod script;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
