//! Hazard detection for the decode stage.
//!
//! This module implements the checks that gate promotion from DECODE to
//! ISSUE. It detects:
//! 1. **RAW hazards:** A source register with a pending writer — either one
//!    already issued (visible in the scoreboard) or an earlier instruction
//!    still waiting in DECODE/ISSUE that has not reached the scoreboard yet.
//! 2. **Structural hazards:** The required execution unit has no capacity
//!    left after accounting for demand already queued in ISSUE.
//!
//! WAR and WAW hazards exist in the taxonomy but are not detected: only
//! source registers are checked against pending writes. Branches never
//! redirect fetch, so control hazards do not arise.
//!
//! Checks run in a fixed order — RAW on src1, RAW on src2, structural — and
//! the first hit wins, so a stall always carries a single reason.

use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::slot::{PipelineSlot, Stage};
use crate::core::pipeline::units::ExecutionUnits;
use crate::isa::instruction::Instruction;
use crate::isa::opcode::ExecUnit;

/// A hazard blocking one decode-stage instruction this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hazard {
    /// A source register has a pending writer.
    Raw {
        /// The blocked source register.
        reg: i32,
        /// Id of the writing instruction.
        writer: i32,
    },
    /// The required execution unit is fully claimed.
    Structural {
        /// The contended unit kind.
        unit: ExecUnit,
    },
}

impl Hazard {
    /// Human-readable stall reason, as recorded in the cycle trace.
    pub fn reason(&self) -> String {
        match self {
            Hazard::Raw { reg, writer } => format!("RAW on R{reg} (writer: I{writer})"),
            Hazard::Structural { unit } => format!("Structural - {unit} busy"),
        }
    }
}

/// Pooled-unit demand queued ahead of the slot being checked.
///
/// Slots sitting in ISSUE have passed decode but not yet claimed their unit;
/// their demand must count against availability or decode would promote
/// instructions the issue stage cannot serve in order.
#[derive(Debug, Clone, Default)]
pub struct UnitDemand {
    counts: [u32; ExecUnit::POOLED.len()],
}

impl UnitDemand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one queued claim on `unit`. `Any` carries no demand.
    pub fn add(&mut self, unit: ExecUnit) {
        if let Some(i) = unit.pool_index() {
            self.counts[i] += 1;
        }
    }

    /// Queued claims on `unit`.
    pub fn get(&self, unit: ExecUnit) -> u32 {
        unit.pool_index().map_or(0, |i| self.counts[i])
    }
}

/// Checks the instruction in slot `index` for a hazard this cycle.
///
/// Returns the first hazard found, or `None` when the slot may be promoted
/// to ISSUE. The caller owns the bookkeeping (stall flag, reason, counters).
///
/// # Arguments
///
/// * `index` - Slot index of the instruction being checked.
/// * `instructions` - The full program, in slot order.
/// * `slots` - Pipeline state for the full program, in slot order.
/// * `scoreboard` - Register reservations made by issued instructions.
/// * `units` - The execution-unit pool.
/// * `issue_demand` - Demand from slots already queued in ISSUE.
/// * `cycle` - Current cycle number.
pub fn detect(
    index: usize,
    instructions: &[Instruction],
    slots: &[PipelineSlot],
    scoreboard: &Scoreboard,
    units: &ExecutionUnits,
    issue_demand: &UnitDemand,
    cycle: u64,
) -> Option<Hazard> {
    let instr = &instructions[index];

    for src in [instr.src1, instr.src2] {
        if let Some(hazard) = raw_on(src, index, instructions, slots, scoreboard, cycle) {
            return Some(hazard);
        }
    }

    let unit = instr.opcode.unit();
    if unit == ExecUnit::Any {
        // Sentinel class (NOP): no pool claim, so no structural hazard.
        return None;
    }
    if units.available(unit) <= issue_demand.get(unit) {
        return Some(Hazard::Structural { unit });
    }

    None
}

/// RAW check for a single source register.
///
/// An issued writer is visible through the scoreboard. A writer that has
/// passed fetch but not yet issued (stage DECODE or ISSUE) is found by
/// scanning earlier slots, newest first, so the reported writer is the one
/// whose value the reader will actually consume.
fn raw_on(
    src: i32,
    index: usize,
    instructions: &[Instruction],
    slots: &[PipelineSlot],
    scoreboard: &Scoreboard,
    cycle: u64,
) -> Option<Hazard> {
    if src < 0 {
        return None;
    }

    if scoreboard.is_busy(src, cycle) {
        return Some(Hazard::Raw {
            reg: src,
            writer: scoreboard.writer_of(src),
        });
    }

    for j in (0..index).rev() {
        let pre_issue = matches!(slots[j].stage, Stage::Decode | Stage::Issue);
        if pre_issue && instructions[j].dest >= 0 && instructions[j].dest == src {
            return Some(Hazard::Raw {
                reg: src,
                writer: instructions[j].id as i32,
            });
        }
    }

    None
}
