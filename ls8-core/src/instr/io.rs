use super::Ls8Inst;
use crate::cpu::Ls8Cpu;
use crate::errors::Ls8Fault;

pub trait Ls8Io {
    fn prn(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault>;
    fn pra(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault>;
}

impl<'a> Ls8Io for Ls8Cpu<'a> {
    /// Emits the register value as a decimal integer.
    fn prn(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault> {
        let val = self.regs.get(inst.reg_a())?;
        self.console.print_num(val);
        Ok(())
    }

    /// Emits the register value as a single character code.
    fn pra(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault> {
        let val = self.regs.get(inst.reg_a())?;
        self.console.print_char(val);
        Ok(())
    }
}
