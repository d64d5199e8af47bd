//! Per-instruction pipeline slot state.

use crate::isa::opcode::ExecUnit;

/// Pipeline stages, in the order a slot passes through them.
///
/// The derived ordering is meaningful: a slot's stage only ever moves
/// toward `Complete`, one step per cycle at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Not yet entered the pipeline.
    Idle,
    Fetch,
    Decode,
    Issue,
    Execute,
    Writeback,
    /// Retired; the slot no longer occupies any resource.
    Complete,
}

impl Stage {
    /// Display name, as used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Idle => "IDLE",
            Stage::Fetch => "FETCH",
            Stage::Decode => "DECODE",
            Stage::Issue => "ISSUE",
            Stage::Execute => "EXECUTE",
            Stage::Writeback => "WRITEBACK",
            Stage::Complete => "COMPLETE",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable pipeline state for one instruction.
///
/// Slot `i` is bound to instruction `i` for the life of the simulation.
#[derive(Debug, Clone)]
pub struct PipelineSlot {
    /// Current stage.
    pub stage: Stage,
    /// Unit granted at issue; `Any` until then (and forever for NOP).
    pub assigned_unit: ExecUnit,
    /// Cycles spent in the current stage; only advanced during EXECUTE.
    pub cycles_in_stage: u64,
    /// Cycles this slot has been active (neither IDLE nor COMPLETE).
    pub total_cycles: u64,
    /// Set while the decode-stage hazard check is failing.
    pub stalled: bool,
    /// Why the slot is stalled, when it is.
    pub stall_reason: Option<String>,
    /// Cycle the slot won its execution unit, once issued.
    pub issue_cycle: Option<u64>,
    /// Cycle the slot retired, once complete.
    pub complete_cycle: Option<u64>,
}

impl PipelineSlot {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            assigned_unit: ExecUnit::Any,
            cycles_in_stage: 0,
            total_cycles: 0,
            stalled: false,
            stall_reason: None,
            issue_cycle: None,
            complete_cycle: None,
        }
    }
}

impl Default for PipelineSlot {
    fn default() -> Self {
        Self::new()
    }
}
