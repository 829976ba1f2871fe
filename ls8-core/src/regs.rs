use log::trace;

use crate::consts::cpu::{REG_MAX, REG_SP, SP_INIT};
use crate::errors::Ls8Fault;

/* Comparison flag bits. CMP sets exactly one of these. */
pub const FL_EQ: u8 = 0b001;
pub const FL_LT: u8 = 0b010;
pub const FL_GT: u8 = 0b100;

/// The LS-8 register file: eight 8-bit slots. R5 and R6 are reserved as the
/// interrupt mask and interrupt status registers; R7 boots to the stack
/// pointer seed value.
pub struct Ls8Regs {
    regs: [u8; REG_MAX],
}

impl Ls8Regs {
    pub fn new() -> Ls8Regs {
        let mut regs = [0; REG_MAX];
        regs[REG_SP] = SP_INIT;
        Ls8Regs { regs }
    }

    ///
    /// Reads the value of register `idx`.
    ///
    /// # Arguments
    ///
    ///  - `idx` - Register index. Indexes outside 0..=7 are a bounds fault.
    ///
    pub fn get(&self, idx: usize) -> Result<u8, Ls8Fault> {
        match self.regs.get(idx) {
            Some(val) => Ok(*val),
            None => Err(Ls8Fault::Bounds(idx)),
        }
    }

    ///
    /// Writes `val` into register `idx`. Values are already 8 bits wide, so
    /// no masking is needed on write.
    ///
    /// # Arguments
    ///
    ///  - `idx` - Register index. Indexes outside 0..=7 are a bounds fault.
    ///  - `val` - Value to store.
    ///
    pub fn set(&mut self, idx: usize, val: u8) -> Result<(), Ls8Fault> {
        if idx >= REG_MAX {
            return Err(Ls8Fault::Bounds(idx));
        }
        trace!("REG Write: R{}: {:#04x}", idx, val);
        self.regs[idx] = val;
        Ok(())
    }

    pub fn snapshot(&self) -> [u8; REG_MAX] {
        self.regs
    }
}

/// 3-bit comparison result. Written only by CMP; read by the conditional
/// jumps and saved/restored around interrupts.
pub struct Ls8Flags {
    fl: u8,
}

impl Ls8Flags {
    pub fn new() -> Ls8Flags {
        Ls8Flags { fl: 0 }
    }

    /// Records the result of comparing two register values. Exactly one of
    /// the three flag bits is set afterwards.
    pub fn compare(&mut self, a: u8, b: u8) {
        self.fl = if a == b {
            FL_EQ
        } else if a < b {
            FL_LT
        } else {
            FL_GT
        };
    }

    pub fn bits(&self) -> u8 {
        self.fl
    }

    pub fn set_bits(&mut self, bits: u8) {
        self.fl = bits & 0b111;
    }

    pub fn is_eq(&self) -> bool {
        self.fl & FL_EQ != 0
    }

    pub fn is_lt(&self) -> bool {
        self.fl & FL_LT != 0
    }

    pub fn is_gt(&self) -> bool {
        self.fl & FL_GT != 0
    }
}
