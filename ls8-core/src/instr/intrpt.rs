use super::Ls8Inst;
use crate::cpu::Ls8Cpu;
use crate::errors::Ls8Fault;

pub trait Ls8Interrupt {
    fn iret(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault>;
}

impl<'a> Ls8Interrupt for Ls8Cpu<'a> {
    fn iret(&mut self, _inst: &Ls8Inst) -> Result<(), Ls8Fault> {
        // Exact reverse of the save in `Ls8Cpu::service_interrupt`:
        // registers R6 down to R0, then Flags, then the PC.
        for idx in (0..7).rev() {
            let val = self.pop_byte()?;
            self.regs.set(idx, val)?;
        }

        let fl = self.pop_byte()?;
        self.flags.set_bits(fl);
        self.pc = self.pop_byte()?;

        // The only place interrupts are re-enabled.
        self.ie = true;
        Ok(())
    }
}
