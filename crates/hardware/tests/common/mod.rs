//! Shared helpers for pipeline simulator tests.

/// Tick-by-tick run recording for invariant checks.
pub mod harness;

/// Program construction shortcuts.
pub mod program;
