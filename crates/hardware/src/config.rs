//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline hardware constants (unit capacities, register
//!    file size, cycle cap).
//! 2. **Structures:** Hierarchical config for general behavior and the
//!    pipeline itself.
//!
//! Configuration is supplied via JSON (serde) or `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of integer ALUs (ADD/SUB/MUL/DIV all contend for these).
    pub const ALU_UNITS: u32 = 2;

    /// Number of floating-point units.
    pub const FPU_UNITS: u32 = 1;

    /// Number of memory units (LOAD/STORE ports).
    pub const MEM_UNITS: u32 = 1;

    /// Number of branch units.
    pub const BRANCH_UNITS: u32 = 1;

    /// Architectural register file size. Register indices outside
    /// `[0, NUM_REGS)` are treated as unused operands.
    pub const NUM_REGS: usize = 32;

    /// Hard safety cap on simulated cycles. A run that reaches the cap
    /// returns its partial result rather than an error.
    pub const MAX_CYCLES: u64 = 500;
}

/// General (non-pipeline) simulation options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Render each cycle's pipeline occupancy while simulating.
    pub trace_cycles: bool,
}

/// Pipeline hardware parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Integer ALU count.
    pub alu_units: u32,
    /// Floating-point unit count.
    pub fpu_units: u32,
    /// Memory unit count.
    pub mem_units: u32,
    /// Branch unit count.
    pub branch_units: u32,
    /// Architectural register count tracked by the scoreboard.
    pub num_regs: usize,
    /// Cycle cap; simulation stops here even with work in flight.
    pub max_cycles: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            alu_units: defaults::ALU_UNITS,
            fpu_units: defaults::FPU_UNITS,
            mem_units: defaults::MEM_UNITS,
            branch_units: defaults::BRANCH_UNITS,
            num_regs: defaults::NUM_REGS,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General options.
    pub general: GeneralConfig,
    /// Pipeline hardware parameters.
    pub pipeline: PipelineConfig,
}
