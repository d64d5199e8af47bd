//! Simulation error definitions.
//!
//! All hazard conditions are part of normal pipeline operation and are
//! surfaced through counters and per-cycle stall records, never through this
//! type. The only failures are at setup time, before any cycle is simulated.

use std::fmt;

/// Errors raised when a program is accepted for simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The instruction list contained zero valid instructions.
    EmptyProgram,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyProgram => write!(f, "program contains no valid instructions"),
        }
    }
}

impl std::error::Error for SimError {}
