use log::trace;

use super::{Ls8Inst, Ls8Mnem};
use crate::cpu::Ls8Cpu;
use crate::errors::Ls8Fault;

pub trait Ls8Alu {
    fn alu(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault>;
}

impl<'a> Ls8Alu for Ls8Cpu<'a> {
    ///
    /// Executes one ALU instruction. Both operands name registers; the
    /// result lands in register `a`, except for CMP which writes only the
    /// Flags register. All arithmetic is 8-bit and wraps.
    ///
    fn alu(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault> {
        let a = self.regs.get(inst.reg_a())?;

        // NOT is unary; its single operand byte is the target register and
        // the second operand byte is never read.
        let b = match inst.mnem {
            Ls8Mnem::NOT => 0,
            _ => self.regs.get(inst.reg_b())?,
        };

        let res = match inst.mnem {
            Ls8Mnem::ADD => a.wrapping_add(b),
            Ls8Mnem::SUB => a.wrapping_sub(b),
            Ls8Mnem::MUL => a.wrapping_mul(b),
            Ls8Mnem::DIV => {
                if b == 0 {
                    return Err(Ls8Fault::Arithmetic("division by zero"));
                }
                a / b
            }
            Ls8Mnem::MOD => {
                if b == 0 {
                    return Err(Ls8Fault::Arithmetic("modulo by zero"));
                }
                a % b
            }
            Ls8Mnem::AND => a & b,
            Ls8Mnem::OR => a | b,
            Ls8Mnem::XOR => a ^ b,
            Ls8Mnem::NOT => !a,
            // Shifting an 8-bit value by 8 or more clears it.
            Ls8Mnem::SHL => a.checked_shl(b as u32).unwrap_or(0),
            Ls8Mnem::SHR => a.checked_shr(b as u32).unwrap_or(0),
            Ls8Mnem::CMP => {
                self.flags.compare(a, b);
                return Ok(());
            }
            other => return Err(Ls8Fault::UnsupportedAluOp(other)),
        };

        trace!("ALU {:?}: R{} <- {:#04x}", inst.mnem, inst.a, res);
        self.regs.set(inst.reg_a(), res)
    }
}
