//! Instruction-text parsing and file loading.
//!
//! Programs are plain text, one instruction per line:
//!
//! ```text
//! ADD|SUB|MUL|DIV|FADD|FMUL|FDIV  Rdest Rsrc1 Rsrc2
//! LOAD   Rdest Rsrc1
//! STORE  Rdest Rsrc1
//! BEQ|BNE  Rsrc1 Rsrc2 <target>
//! JMP    <target>
//! NOP
//! ```
//!
//! Tokens are whitespace-separated; registers are `R` followed by a decimal
//! index; `#`-prefixed and blank lines are ignored. Lines that do not match
//! any grammar are silently skipped — ids are assigned densely, in input
//! order, to the lines that parse.

use std::fs;
use std::io;
use std::path::Path;

use crate::isa::instruction::{Instruction, NO_REG};
use crate::isa::opcode::Opcode;

/// Parses a whole program, skipping comments, blanks, and malformed lines.
pub fn parse_program(source: &str) -> Vec<Instruction> {
    let mut program = Vec::new();
    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(instr) = parse_line(line, program.len() + 1) {
            program.push(instr);
        }
    }
    program
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read.
pub fn load_program(path: &Path) -> io::Result<Vec<Instruction>> {
    Ok(parse_program(&fs::read_to_string(path)?))
}

/// Parses one instruction line, or `None` when it matches no grammar.
fn parse_line(line: &str, id: usize) -> Option<Instruction> {
    let mut tokens = line.split_whitespace();
    let opcode: Opcode = tokens.next()?.parse().ok()?;

    let instr = match opcode {
        Opcode::Load | Opcode::Store => {
            let dest = parse_register(tokens.next()?)?;
            let src1 = parse_register(tokens.next()?)?;
            Instruction::new(id, opcode, dest, src1, NO_REG)
        }
        Opcode::Beq | Opcode::Bne => {
            let src1 = parse_register(tokens.next()?)?;
            let src2 = parse_register(tokens.next()?)?;
            let target = tokens.next()?.parse().ok()?;
            Instruction::branch(id, opcode, src1, src2, target)
        }
        Opcode::Jmp => {
            let target = tokens.next()?.parse().ok()?;
            Instruction::branch(id, opcode, NO_REG, NO_REG, target)
        }
        Opcode::Nop => Instruction::new(id, opcode, NO_REG, NO_REG, NO_REG),
        _ => {
            let dest = parse_register(tokens.next()?)?;
            let src1 = parse_register(tokens.next()?)?;
            let src2 = parse_register(tokens.next()?)?;
            Instruction::new(id, opcode, dest, src1, src2)
        }
    };

    Some(instr.with_origin(line))
}

/// Parses `R<n>` into a register index.
fn parse_register(token: &str) -> Option<i32> {
    let index: u32 = token.strip_prefix('R')?.parse().ok()?;
    i32::try_from(index).ok()
}
