//! Decoded instruction record.
//!
//! An `Instruction` is immutable after construction. Register operands are
//! plain indices with `-1` meaning "unused"; the scoreboard treats any
//! out-of-range index the same way, so unused operands need no special
//! handling anywhere in the pipeline.
//!
//! Operand shapes by opcode family:
//! - ALU/FPU arithmetic: `dest`, `src1`, `src2` all valid.
//! - LOAD: `dest` and `src1` valid, `src2 = -1`.
//! - STORE: `dest` and `src1` valid, `src2 = -1`. `dest` names the value
//!   register being stored; the pipeline nevertheless reserves it in the
//!   scoreboard at issue, matching the modeled machine.
//! - BEQ/BNE: `src1`, `src2` valid, `dest = -1`, `is_branch` set.
//! - JMP: all registers `-1`, `is_branch` set.
//! - NOP: all registers `-1`.

use crate::isa::opcode::Opcode;

/// Register index marking an unused operand.
pub const NO_REG: i32 = -1;

/// A decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based position in the accepted program, dense.
    pub id: usize,
    /// Operation.
    pub opcode: Opcode,
    /// First source register, or `NO_REG`.
    pub src1: i32,
    /// Second source register, or `NO_REG`.
    pub src2: i32,
    /// Destination register, or `NO_REG`.
    pub dest: i32,
    /// Branch flag; recorded but never redirects fetch.
    pub is_branch: bool,
    /// Branch target (instruction index); only meaningful when `is_branch`.
    pub branch_target: i32,
    /// The source line this instruction was decoded from.
    pub origin: String,
}

impl Instruction {
    /// Creates a non-branch instruction with the given operands.
    pub fn new(id: usize, opcode: Opcode, dest: i32, src1: i32, src2: i32) -> Self {
        let origin = render_origin(opcode, dest, src1, src2, None);
        Self {
            id,
            opcode,
            src1,
            src2,
            dest,
            is_branch: false,
            branch_target: 0,
            origin,
        }
    }

    /// Creates a branch instruction (BEQ/BNE/JMP) with the given target.
    pub fn branch(id: usize, opcode: Opcode, src1: i32, src2: i32, target: i32) -> Self {
        let origin = render_origin(opcode, NO_REG, src1, src2, Some(target));
        Self {
            id,
            opcode,
            src1,
            src2,
            dest: NO_REG,
            is_branch: true,
            branch_target: target,
            origin,
        }
    }

    /// Replaces the generated origin with the actual source line.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

fn render_origin(opcode: Opcode, dest: i32, src1: i32, src2: i32, target: Option<i32>) -> String {
    let mut text = opcode.mnemonic().to_string();
    for reg in [dest, src1, src2] {
        if reg >= 0 {
            text.push_str(&format!(" R{reg}"));
        }
    }
    if let Some(t) = target {
        text.push_str(&format!(" {t}"));
    }
    text
}
