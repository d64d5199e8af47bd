//! Per-cycle pipeline snapshots.
//!
//! After every simulated cycle the recorder captures which instructions sit
//! in which stage and which are stalled, keyed by each instruction's origin
//! line. Snapshots are immutable once captured and serialize to the
//! canonical external form (uppercase stage keys, `instruction`/`reason`
//! stall records).

use serde::Serialize;

use crate::core::pipeline::slot::{PipelineSlot, Stage};
use crate::isa::instruction::Instruction;

/// Instructions occupying each visible stage, in program order.
///
/// IDLE and COMPLETE slots are omitted: they occupy no pipeline resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StageOccupancy {
    #[serde(rename = "FETCH")]
    pub fetch: Vec<String>,
    #[serde(rename = "DECODE")]
    pub decode: Vec<String>,
    #[serde(rename = "ISSUE")]
    pub issue: Vec<String>,
    #[serde(rename = "EXECUTE")]
    pub execute: Vec<String>,
    #[serde(rename = "WRITEBACK")]
    pub writeback: Vec<String>,
}

/// A stalled instruction and the hazard that blocked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StallRecord {
    /// Origin line of the stalled instruction.
    pub instruction: String,
    /// Stall reason, as produced by hazard detection.
    pub reason: String,
}

/// Immutable record of pipeline state at the end of one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// Stage occupancy in slot order.
    pub stages: StageOccupancy,
    /// Every slot stalled during this cycle, with its reason.
    pub stalls: Vec<StallRecord>,
}

/// Collects one snapshot per simulated cycle.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    cycles: Vec<CycleSnapshot>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the state of `cycle` from the slot vector.
    pub fn capture(&mut self, cycle: u64, instructions: &[Instruction], slots: &[PipelineSlot]) {
        let mut stages = StageOccupancy::default();
        let mut stalls = Vec::new();

        for (instr, slot) in instructions.iter().zip(slots) {
            let bucket = match slot.stage {
                Stage::Fetch => &mut stages.fetch,
                Stage::Decode => &mut stages.decode,
                Stage::Issue => &mut stages.issue,
                Stage::Execute => &mut stages.execute,
                Stage::Writeback => &mut stages.writeback,
                Stage::Idle | Stage::Complete => continue,
            };
            bucket.push(instr.origin.clone());
        }

        for (instr, slot) in instructions.iter().zip(slots) {
            if slot.stalled {
                stalls.push(StallRecord {
                    instruction: instr.origin.clone(),
                    reason: slot.stall_reason.clone().unwrap_or_default(),
                });
            }
        }

        self.cycles.push(CycleSnapshot { cycle, stages, stalls });
    }

    /// Snapshots captured so far, oldest first.
    pub fn cycles(&self) -> &[CycleSnapshot] {
        &self.cycles
    }

    /// Consumes the recorder, yielding the full trace.
    pub fn into_cycles(self) -> Vec<CycleSnapshot> {
        self.cycles
    }
}
