//! Static dependency analysis over a decoded program.
//!
//! Reports, per instruction, which earlier instructions it has a true (RAW)
//! dependency on: an earlier instruction whose destination register matches
//! one of its sources. This is a property of the program text alone — the
//! pipeline detects the same dependencies dynamically, but the static view
//! is useful before a run.

use crate::isa::instruction::Instruction;

/// RAW dependencies of one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Id of the dependent (reading) instruction.
    pub id: usize,
    /// Ids of earlier instructions it reads from, in program order.
    pub depends_on: Vec<usize>,
}

/// Computes RAW dependencies for every instruction that has any.
pub fn raw_dependencies(program: &[Instruction]) -> Vec<Dependency> {
    let mut report = Vec::new();
    for (i, instr) in program.iter().enumerate() {
        let depends_on: Vec<usize> = program[..i]
            .iter()
            .filter(|prev| {
                prev.dest >= 0 && (prev.dest == instr.src1 || prev.dest == instr.src2)
            })
            .map(|prev| prev.id)
            .collect();
        if !depends_on.is_empty() {
            report.push(Dependency {
                id: instr.id,
                depends_on,
            });
        }
    }
    report
}
