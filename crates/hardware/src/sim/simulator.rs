//! One-call simulation entry point.
//!
//! Wraps construction, the run loop, and result assembly for callers that
//! do not need to step the engine themselves.

use serde::Serialize;

use crate::common::SimError;
use crate::config::Config;
use crate::core::pipeline::trace::CycleSnapshot;
use crate::core::Engine;
use crate::isa::instruction::Instruction;
use crate::sim::loader;
use crate::stats::SimStats;

/// Full result of a simulation run.
///
/// Serializes to the canonical external form: camelCase statistics plus the
/// ordered per-cycle snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimResult {
    /// Final aggregate statistics.
    pub stats: SimStats,
    /// One snapshot per simulated cycle, in order.
    pub cycles: Vec<CycleSnapshot>,
}

/// Simulates a decoded program to completion (or the cycle cap).
///
/// # Errors
///
/// Returns [`SimError::EmptyProgram`] when `instructions` is empty.
pub fn simulate(instructions: Vec<Instruction>, config: &Config) -> Result<SimResult, SimError> {
    let mut engine = Engine::new(instructions, config)?;
    engine.run();
    let stats = engine.stats();
    Ok(SimResult {
        stats,
        cycles: engine.into_trace(),
    })
}

/// Parses and simulates instruction text.
///
/// # Errors
///
/// Returns [`SimError::EmptyProgram`] when no line of `source` parses to a
/// valid instruction.
pub fn simulate_source(source: &str, config: &Config) -> Result<SimResult, SimError> {
    simulate(loader::parse_program(source), config)
}
