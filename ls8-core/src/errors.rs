use thiserror::Error;

use crate::instr::Ls8Mnem;

/// Faults that can occur inside the LS-8 execution core. All of them are
/// fatal to the current run; the CPU is left `Halted` when one surfaces.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ls8Fault {
    /// Memory address or register index outside its valid range.
    #[error("access out of range: {0:#x}")]
    Bounds(usize),

    /// Opcode routed to the ALU that the ALU does not implement.
    #[error("unsupported ALU operation: {0:?}")]
    UnsupportedAluOp(Ls8Mnem),

    /// Division or modulo with a zero divisor.
    #[error("arithmetic fault: {0}")]
    Arithmetic(&'static str),

    /// Opcode not present in the dispatch table.
    #[error("invalid instruction {opcode:#04x} at pc {pc:#04x}")]
    InvalidInstruction { opcode: u8, pc: u8 },

    /// Program rejected before execution started.
    #[error("program load rejected: {0}")]
    ProgramLoad(&'static str),
}
