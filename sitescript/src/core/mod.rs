//! Deterministic, pure logic for site script filtering.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod filter;
pub mod invariants;
pub mod policy;
pub mod transform;
