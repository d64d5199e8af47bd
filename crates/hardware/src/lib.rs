//! Superscalar pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator for a five-stage,
//! in-order-issue superscalar pipeline with the following:
//! 1. **ISA:** Symbolic opcodes, execution-unit and latency tables, and the
//!    decoded instruction record.
//! 2. **Core:** The pipeline model — per-instruction slots, register
//!    scoreboard, execution-unit pool, hazard detection, per-cycle trace
//!    capture, and the cycle engine itself.
//! 3. **Simulation:** Instruction-text loading, static dependency analysis,
//!    and the one-call simulation entry point.
//! 4. **Statistics:** Aggregate performance counters (cycles, IPC, hazards).

/// Common types shared across the simulator (errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Pipeline core (slots, scoreboard, units, hazards, trace, engine).
pub mod core;
/// Instruction set (opcodes, unit/latency tables, instruction record).
pub mod isa;
/// Program loading, dependency analysis, and the simulation entry point.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Simulation error type; construction-time failures only.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The cycle engine; construct with `Engine::new`, drive with `run` or `tick`.
pub use crate::core::Engine;
/// One-call simulation API and its result type.
pub use crate::sim::simulator::{simulate, simulate_source, SimResult};
/// Final performance statistics.
pub use crate::stats::SimStats;
