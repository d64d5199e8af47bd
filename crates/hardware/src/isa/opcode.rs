//! Opcodes and their execution-unit / latency tables.
//!
//! Every opcode maps to exactly one execution-unit kind and a fixed
//! execution latency in whole cycles. Both tables are total: adding an
//! opcode without extending them is a compile error.

use std::fmt;
use std::str::FromStr;

/// Execution unit kinds.
///
/// `Any` is a sentinel: it is the "not yet assigned" value on a pipeline
/// slot and the unit class of NOP. It owns no pool capacity and is never
/// allocated or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecUnit {
    /// Integer arithmetic-logic unit.
    Alu,
    /// Floating-point unit.
    Fpu,
    /// Memory (load/store) unit.
    Mem,
    /// Branch unit.
    Branch,
    /// Unassigned sentinel; not a pooled resource.
    Any,
}

impl ExecUnit {
    /// The pooled unit kinds, in pool-index order. `Any` is excluded.
    pub const POOLED: [ExecUnit; 4] = [
        ExecUnit::Alu,
        ExecUnit::Fpu,
        ExecUnit::Mem,
        ExecUnit::Branch,
    ];

    /// Index of this unit within the capacity pool, or `None` for `Any`.
    pub(crate) fn pool_index(self) -> Option<usize> {
        match self {
            ExecUnit::Alu => Some(0),
            ExecUnit::Fpu => Some(1),
            ExecUnit::Mem => Some(2),
            ExecUnit::Branch => Some(3),
            ExecUnit::Any => None,
        }
    }

    /// Display name, as used in stall reasons and trace output.
    pub fn name(self) -> &'static str {
        match self {
            ExecUnit::Alu => "ALU",
            ExecUnit::Fpu => "FPU",
            ExecUnit::Mem => "MEM",
            ExecUnit::Branch => "BRANCH",
            ExecUnit::Any => "ANY",
        }
    }
}

impl fmt::Display for ExecUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instruction opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    Fadd,
    Fmul,
    Fdiv,
    Load,
    Store,
    Beq,
    Bne,
    Jmp,
    Nop,
}

impl Opcode {
    /// The execution unit this opcode contends for.
    pub fn unit(self) -> ExecUnit {
        match self {
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div => ExecUnit::Alu,
            Opcode::Fadd | Opcode::Fmul | Opcode::Fdiv => ExecUnit::Fpu,
            Opcode::Load | Opcode::Store => ExecUnit::Mem,
            Opcode::Beq | Opcode::Bne | Opcode::Jmp => ExecUnit::Branch,
            Opcode::Nop => ExecUnit::Any,
        }
    }

    /// Execution latency in whole cycles. Always at least 1.
    pub fn latency(self) -> u64 {
        match self {
            Opcode::Add | Opcode::Sub => 1,
            Opcode::Mul => 3,
            Opcode::Div => 8,
            Opcode::Fadd => 4,
            Opcode::Fmul => 5,
            Opcode::Fdiv => 12,
            Opcode::Load => 3,
            Opcode::Store => 2,
            Opcode::Beq | Opcode::Bne | Opcode::Jmp => 1,
            Opcode::Nop => 1,
        }
    }

    /// Assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Fadd => "FADD",
            Opcode::Fmul => "FMUL",
            Opcode::Fdiv => "FDIV",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Beq => "BEQ",
            Opcode::Bne => "BNE",
            Opcode::Jmp => "JMP",
            Opcode::Nop => "NOP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a mnemonic does not name a known opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOpcode;

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Opcode::Add),
            "SUB" => Ok(Opcode::Sub),
            "MUL" => Ok(Opcode::Mul),
            "DIV" => Ok(Opcode::Div),
            "FADD" => Ok(Opcode::Fadd),
            "FMUL" => Ok(Opcode::Fmul),
            "FDIV" => Ok(Opcode::Fdiv),
            "LOAD" => Ok(Opcode::Load),
            "STORE" => Ok(Opcode::Store),
            "BEQ" => Ok(Opcode::Beq),
            "BNE" => Ok(Opcode::Bne),
            "JMP" => Ok(Opcode::Jmp),
            "NOP" => Ok(Opcode::Nop),
            _ => Err(UnknownOpcode),
        }
    }
}
