//! The cycle engine: backward stage sweep, termination, trace capture.
//!
//! Each call to [`Engine::tick`] advances the pipeline by exactly one cycle
//! by sweeping the stages in reverse order:
//!
//! 1. **WRITEBACK:** Retire finished instructions, free their register
//!    reservation and execution unit.
//! 2. **EXECUTE:** Advance latency counters; move finished work to
//!    writeback.
//! 3. **ISSUE:** In program order, claim execution units and reserve
//!    destination registers.
//! 4. **DECODE:** In program order, run hazard detection; promote the
//!    hazard-free prefix to issue.
//! 5. **FETCH:** Move fetched slots to decode and admit idle slots into
//!    fetch.
//! 6. **Accounting + snapshot:** Bump active-cycle counters and capture the
//!    cycle trace.
//!
//! The reverse order is the correctness contract: a slot observes the
//! effects of later stages only, so freshly admitted work can never cross
//! more than one stage boundary within a single cycle. The unit pool is
//! never reset inside the loop; multi-cycle executions hold their unit
//! until writeback releases it.

use crate::common::SimError;
use crate::config::{Config, PipelineConfig};
use crate::core::pipeline::hazards::{self, Hazard, UnitDemand};
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::slot::{PipelineSlot, Stage};
use crate::core::pipeline::trace::{CycleSnapshot, TraceRecorder};
use crate::core::pipeline::units::ExecutionUnits;
use crate::isa::instruction::Instruction;
use crate::isa::opcode::ExecUnit;
use crate::stats::SimStats;

/// Cycle-accurate pipeline engine over a fixed instruction list.
pub struct Engine {
    config: PipelineConfig,
    instructions: Vec<Instruction>,
    slots: Vec<PipelineSlot>,
    scoreboard: Scoreboard,
    units: ExecutionUnits,
    stats: SimStats,
    recorder: TraceRecorder,
    cycle: u64,
    completed: usize,
}

impl Engine {
    /// Creates an engine over `instructions`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptyProgram`] when the list is empty; an empty
    /// program is rejected before any cycle runs.
    pub fn new(instructions: Vec<Instruction>, config: &Config) -> Result<Self, SimError> {
        if instructions.is_empty() {
            return Err(SimError::EmptyProgram);
        }
        let slots = instructions.iter().map(|_| PipelineSlot::new()).collect();
        let pipeline = config.pipeline.clone();
        Ok(Self {
            scoreboard: Scoreboard::new(pipeline.num_regs),
            units: ExecutionUnits::new(&pipeline),
            config: pipeline,
            slots,
            instructions,
            stats: SimStats::default(),
            recorder: TraceRecorder::new(),
            cycle: 0,
            completed: 0,
        })
    }

    /// Advances the pipeline by one cycle.
    pub fn tick(&mut self) {
        self.cycle += 1;
        self.writeback_pass();
        self.execute_pass();
        self.issue_pass();
        self.decode_pass();
        self.fetch_pass();
        self.account_pass();
        self.recorder
            .capture(self.cycle, &self.instructions, &self.slots);
    }

    /// Runs until every instruction completes or the cycle cap is reached.
    pub fn run(&mut self) {
        while !self.is_done() {
            self.tick();
        }
    }

    /// Has the simulation finished (all retired, or cycle cap hit)?
    pub fn is_done(&self) -> bool {
        self.completed == self.instructions.len() || self.cycle >= self.config.max_cycles
    }

    /// Did the run stop at the cycle cap with work still in flight?
    pub fn timed_out(&self) -> bool {
        self.completed < self.instructions.len()
    }

    /// Cycles simulated so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Instructions retired so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// The program under simulation, in slot order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Pipeline state per instruction, in slot order.
    pub fn slots(&self) -> &[PipelineSlot] {
        &self.slots
    }

    /// The execution-unit pool (read-only; for trace display).
    pub fn units(&self) -> &ExecutionUnits {
        &self.units
    }

    /// Snapshots captured so far, one per cycle.
    pub fn trace(&self) -> &[CycleSnapshot] {
        self.recorder.cycles()
    }

    /// Consumes the engine, yielding the full cycle trace.
    pub fn into_trace(self) -> Vec<CycleSnapshot> {
        self.recorder.into_cycles()
    }

    /// Finalized statistics for the run so far.
    pub fn stats(&self) -> SimStats {
        let mut stats = self.stats.clone();
        stats.total_cycles = self.cycle;
        stats.instructions_completed = self.completed as u64;
        stats.finalize();
        stats
    }

    /// Retire every writeback-stage slot: clear its register reservation,
    /// release its unit, and stamp the completion cycle.
    fn writeback_pass(&mut self) {
        for i in 0..self.slots.len() {
            if self.slots[i].stage != Stage::Writeback {
                continue;
            }
            self.scoreboard.clear_busy(self.instructions[i].dest);
            let unit = self.slots[i].assigned_unit;
            if unit != ExecUnit::Any {
                self.units.release(unit);
            }
            let slot = &mut self.slots[i];
            slot.stage = Stage::Complete;
            slot.complete_cycle = Some(self.cycle);
            self.completed += 1;
        }
    }

    /// Advance every executing slot's latency counter; slots that reach
    /// their opcode latency move to writeback.
    fn execute_pass(&mut self) {
        for i in 0..self.slots.len() {
            if self.slots[i].stage != Stage::Execute {
                continue;
            }
            let latency = self.instructions[i].opcode.latency();
            let slot = &mut self.slots[i];
            slot.cycles_in_stage += 1;
            if slot.cycles_in_stage >= latency {
                slot.stage = Stage::Writeback;
                slot.cycles_in_stage = 0;
            }
        }
    }

    /// Sequentially grant units to issue-stage slots; earlier slots get
    /// first pick. A slot that cannot claim its unit simply waits — that is
    /// queueing, not a stall, so no flag is raised here.
    fn issue_pass(&mut self) {
        for i in 0..self.slots.len() {
            if self.slots[i].stage != Stage::Issue {
                continue;
            }
            let instr = &self.instructions[i];
            let unit = instr.opcode.unit();
            // The sentinel class (NOP) claims no pooled unit.
            let granted = unit == ExecUnit::Any || self.units.allocate(unit);
            if !granted {
                continue;
            }
            self.scoreboard
                .mark_busy(instr.dest, instr.id, self.cycle + instr.opcode.latency());
            let slot = &mut self.slots[i];
            slot.stage = Stage::Execute;
            slot.assigned_unit = unit;
            slot.cycles_in_stage = 0;
            slot.issue_cycle = Some(self.cycle);
        }
    }

    /// Run hazard detection over every decode-stage slot in program order.
    ///
    /// Every slot gets checked (and flagged/counted on a hazard), but
    /// promotion stops at the first hazard: issue must stay in program
    /// order, so nothing may overtake a stalled instruction.
    fn decode_pass(&mut self) {
        let mut demand = UnitDemand::new();
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.stage == Stage::Issue {
                demand.add(self.instructions[i].opcode.unit());
            }
        }

        let mut blocked = false;
        for i in 0..self.slots.len() {
            if self.slots[i].stage != Stage::Decode {
                continue;
            }
            let hazard = hazards::detect(
                i,
                &self.instructions,
                &self.slots,
                &self.scoreboard,
                &self.units,
                &demand,
                self.cycle,
            );
            match hazard {
                Some(hazard) => {
                    match hazard {
                        Hazard::Raw { .. } => self.stats.raw_hazards += 1,
                        Hazard::Structural { .. } => self.stats.structural_hazards += 1,
                    }
                    self.stats.total_stalls += 1;
                    let slot = &mut self.slots[i];
                    slot.stalled = true;
                    slot.stall_reason = Some(hazard.reason());
                    blocked = true;
                }
                None => {
                    let unit = self.instructions[i].opcode.unit();
                    let slot = &mut self.slots[i];
                    slot.stalled = false;
                    slot.stall_reason = None;
                    if !blocked {
                        slot.stage = Stage::Issue;
                        demand.add(unit);
                    }
                }
            }
        }
    }

    /// Move fetched slots into decode and admit idle slots into fetch.
    fn fetch_pass(&mut self) {
        for slot in &mut self.slots {
            match slot.stage {
                Stage::Fetch => {
                    slot.stage = Stage::Decode;
                    slot.cycles_in_stage = 0;
                }
                Stage::Idle => slot.stage = Stage::Fetch,
                _ => {}
            }
        }
    }

    /// Count this cycle against every in-flight slot.
    fn account_pass(&mut self) {
        for slot in &mut self.slots {
            if !matches!(slot.stage, Stage::Idle | Stage::Complete) {
                slot.total_cycles += 1;
            }
        }
    }
}
