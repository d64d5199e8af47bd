//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline model:
//! 1. **Slots:** Per-instruction mutable stage and timing state.
//! 2. **Scoreboard:** Register reservation table for RAW detection.
//! 3. **Units:** Fixed-capacity execution-unit pool.
//! 4. **Hazards:** RAW and structural hazard detection at decode.
//! 5. **Trace:** Immutable per-cycle occupancy snapshots.
//! 6. **Engine:** The backward-sweep cycle loop tying it all together.

/// The cycle engine and its stage passes.
pub mod engine;

/// Hazard detection for the decode stage.
pub mod hazards;

/// Register scoreboard for RAW dependency tracking.
pub mod scoreboard;

/// Per-instruction pipeline slot state.
pub mod slot;

/// Per-cycle pipeline snapshots.
pub mod trace;

/// Execution-unit resource pool.
pub mod units;
