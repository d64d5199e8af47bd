//! Simulation utilities and program loading.
//!
//! This module provides everything around the core engine:
//! 1. **Loader:** Parses instruction text into the decoded program.
//! 2. **Analysis:** Static RAW dependency reporting over a program.
//! 3. **Simulator:** The one-call entry point returning stats plus trace.

/// Static dependency analysis.
pub mod analysis;

/// Instruction-text parsing and file loading.
pub mod loader;

/// One-call simulation API.
pub mod simulator;
