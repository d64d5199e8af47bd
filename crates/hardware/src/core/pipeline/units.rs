//! Execution-unit resource pool.
//!
//! A fixed capacity per pooled unit kind (ALU, FPU, MEM, BRANCH) and a live
//! availability count. Issue allocates, writeback releases. `ExecUnit::Any`
//! is not pooled: queries against it report unavailable and release is a
//! no-op, so the sentinel can never leak capacity.

use crate::config::PipelineConfig;
use crate::isa::opcode::ExecUnit;

const POOL: usize = ExecUnit::POOLED.len();

/// Fixed-capacity pool of execution units.
#[derive(Debug, Clone)]
pub struct ExecutionUnits {
    capacity: [u32; POOL],
    available: [u32; POOL],
}

impl ExecutionUnits {
    /// Creates a pool with the configured capacities, all units free.
    pub fn new(config: &PipelineConfig) -> Self {
        let capacity = [
            config.alu_units,
            config.fpu_units,
            config.mem_units,
            config.branch_units,
        ];
        Self {
            capacity,
            available: capacity,
        }
    }

    /// Configured capacity of `unit`; 0 for `Any`.
    pub fn capacity(&self, unit: ExecUnit) -> u32 {
        unit.pool_index().map_or(0, |i| self.capacity[i])
    }

    /// Units of this kind currently free; 0 for `Any`.
    pub fn available(&self, unit: ExecUnit) -> u32 {
        unit.pool_index().map_or(0, |i| self.available[i])
    }

    /// Is at least one unit of this kind free?
    pub fn is_available(&self, unit: ExecUnit) -> bool {
        self.available(unit) > 0
    }

    /// Claims one unit of this kind. Returns whether the claim succeeded.
    pub fn allocate(&mut self, unit: ExecUnit) -> bool {
        match unit.pool_index() {
            Some(i) if self.available[i] > 0 => {
                self.available[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns one unit of this kind to the pool.
    ///
    /// Guards against double-release: availability never exceeds capacity.
    pub fn release(&mut self, unit: ExecUnit) {
        if let Some(i) = unit.pool_index() {
            if self.available[i] < self.capacity[i] {
                self.available[i] += 1;
            }
        }
    }

    /// Frees every unit. Only valid between runs, never mid-simulation:
    /// resetting while instructions execute would break capacity tracking.
    pub fn reset(&mut self) {
        self.available = self.capacity;
    }

    /// One-line availability summary for trace output.
    pub fn status(&self) -> String {
        let mut out = String::from("Units:");
        for unit in ExecUnit::POOLED {
            out.push_str(&format!(
                " {}({}/{})",
                unit,
                self.available(unit),
                self.capacity(unit)
            ));
        }
        out
    }
}
