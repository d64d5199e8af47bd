//! Simulation statistics collection and reporting.
//!
//! Counters accumulate during the run; `finalize` derives IPC once the cycle
//! count is known. The serialized form uses the canonical camelCase field
//! names consumed by external tooling.
//!
//! `war_hazards`, `waw_hazards`, and `branch_mispredictions` are always zero
//! in the current pipeline model but remain part of the schema.

use serde::Serialize;

/// Final performance statistics for a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimStats {
    /// Cycles simulated.
    pub total_cycles: u64,
    /// Instructions retired.
    pub instructions_completed: u64,
    /// Instructions per cycle; 0 when no cycles ran.
    pub ipc: f64,
    /// Stall-cycles observed at decode, across all instructions.
    pub total_stalls: u64,
    /// Read-after-write hazard observations.
    pub raw_hazards: u64,
    /// Write-after-read hazards; not detected, always 0.
    pub war_hazards: u64,
    /// Write-after-write hazards; not detected, always 0.
    pub waw_hazards: u64,
    /// Structural hazard observations.
    pub structural_hazards: u64,
    /// Branch mispredictions; branches never redirect fetch, always 0.
    pub branch_mispredictions: u64,
}

impl SimStats {
    /// Derives IPC from the completed/cycle counters.
    pub fn finalize(&mut self) {
        self.ipc = if self.total_cycles > 0 {
            self.instructions_completed as f64 / self.total_cycles as f64
        } else {
            0.0
        };
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("total_cycles             {}", self.total_cycles);
        println!("instructions_completed   {}", self.instructions_completed);
        println!("ipc                      {:.4}", self.ipc);
        println!("total_stalls             {}", self.total_stalls);
        println!("raw_hazards              {}", self.raw_hazards);
        println!("war_hazards              {}", self.war_hazards);
        println!("waw_hazards              {}", self.waw_hazards);
        println!("structural_hazards       {}", self.structural_hazards);
        println!("branch_mispredictions    {}", self.branch_mispredictions);
        println!("==========================================================");
    }
}
