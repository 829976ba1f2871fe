use log::{debug, trace, warn};

use crate::consts::cpu::{REG_IM, REG_IS, SP_INIT};
use crate::consts::{memmap, MEM_SIZE};
use crate::errors::Ls8Fault;
use crate::instr::{Ls8Alu, Ls8ControlFlow, Ls8Interrupt, Ls8Io, Ls8LoadStore};
use crate::instr::{Ls8Inst, Ls8Mnem};
use crate::mem::{Ls8Clock, Ls8Ram, Ls8Timers};
use crate::periph::Ls8Console;
use crate::regs::{Ls8Flags, Ls8Regs};

/// Lifecycle of a CPU instance. `Halted` is terminal; it is reached through
/// HLT or through any fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    Idle,
    Running,
    Halted,
}

pub struct Ls8Cpu<'a> {
    pub(crate) ram: Ls8Ram,
    pub(crate) regs: Ls8Regs,
    pub(crate) flags: Ls8Flags,
    timers: Ls8Timers,

    pub(crate) pc: u8,
    pub(crate) sp: u8,
    pub(crate) ie: bool,
    pub(crate) state: CpuState,

    pub(crate) console: &'a mut dyn Ls8Console,
    clock: &'a mut dyn Ls8Clock,
}

impl<'a> Ls8Cpu<'a> {
    pub fn new(console: &'a mut dyn Ls8Console, clock: &'a mut dyn Ls8Clock) -> Ls8Cpu<'a> {
        let start_ms = clock.now_ms();
        Ls8Cpu {
            ram: Ls8Ram::new(),
            regs: Ls8Regs::new(),
            flags: Ls8Flags::new(),
            timers: Ls8Timers::new(start_ms),

            pc: 0,
            // Seeded from the R7 boot value. The two diverge after boot:
            // stack operations move only this field and never write R7.
            sp: SP_INIT,
            ie: true,
            state: CpuState::Idle,

            console,
            clock,
        }
    }

    ///
    /// Writes a program into memory starting at address 0. Only valid
    /// before the first step; the rest of memory stays zeroed.
    ///
    pub fn load(&mut self, program: &[u8]) -> Result<(), Ls8Fault> {
        if self.state != CpuState::Idle {
            return Err(Ls8Fault::ProgramLoad("cpu has already started"));
        }
        if program.len() > MEM_SIZE {
            return Err(Ls8Fault::ProgramLoad("program larger than memory"));
        }
        if program.len() > memmap::VECTOR_TABLE_BASE {
            warn!("program extends into the interrupt vector table");
        }

        for (addr, byte) in program.iter().enumerate() {
            self.ram.write(addr, *byte)?;
        }
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    ///
    /// Runs the fetch/decode/execute loop until the CPU halts. Returns
    /// `Ok(())` when the program executed HLT; any fault ends the run with
    /// the CPU left `Halted`.
    ///
    pub fn run(&mut self) -> Result<(), Ls8Fault> {
        while self.step()? == CpuState::Running {}
        Ok(())
    }

    ///
    /// Executes one iteration of the run loop: pump the timer, service at
    /// most one pending interrupt, otherwise fetch and execute a single
    /// instruction. Public so a host can interleave its own checks with
    /// execution.
    ///
    pub fn step(&mut self) -> Result<CpuState, Ls8Fault> {
        let res = self.cycle();
        if res.is_err() {
            self.state = CpuState::Halted;
        }
        res
    }

    fn cycle(&mut self) -> Result<CpuState, Ls8Fault> {
        match self.state {
            CpuState::Halted => return Ok(CpuState::Halted),
            CpuState::Idle => self.state = CpuState::Running,
            CpuState::Running => {}
        }

        // Timer fires latch into IS regardless of the enable state; they
        // sit there until IM and `ie` allow them to be serviced.
        let now_ms = self.clock.now_ms();
        let fired = self.timers.pump(now_ms);
        if fired != 0 {
            let is = self.regs.get(REG_IS)?;
            self.regs.set(REG_IS, is | fired)?;
        }

        if self.ie && self.service_interrupt()? {
            return Ok(self.state);
        }

        self.trace_state();

        let inst = self.fetch()?;
        self.execute(&inst)?;

        if !inst.mnem.sets_pc() {
            self.pc = inst.pc.wrapping_add(1 + inst.mnem.operands());
        }

        Ok(self.state)
    }

    fn fetch(&mut self) -> Result<Ls8Inst, Ls8Fault> {
        let pc = self.pc;
        let opcode = self.ram.read(pc as usize)?;
        let mnem = match Ls8Mnem::decode(opcode) {
            Some(mnem) => mnem,
            None => return Err(Ls8Fault::InvalidInstruction { opcode, pc }),
        };

        // Both operand slots are read unconditionally; handlers only look
        // at the bytes their mnemonic defines.
        let a = self.ram.read(pc.wrapping_add(1) as usize)?;
        let b = self.ram.read(pc.wrapping_add(2) as usize)?;

        Ok(Ls8Inst {
            pc,
            opcode,
            mnem,
            a,
            b,
        })
    }

    fn execute(&mut self, inst: &Ls8Inst) -> Result<(), Ls8Fault> {
        match inst.mnem {
            Ls8Mnem::HLT => {
                debug!("HLT at pc {:#04x}", inst.pc);
                self.state = CpuState::Halted;
                Ok(())
            }
            Ls8Mnem::LDI => self.ldi(inst),
            Ls8Mnem::ST => self.st(inst),
            Ls8Mnem::PUSH => self.push(inst),
            Ls8Mnem::POP => self.pop(inst),
            Ls8Mnem::PRN => self.prn(inst),
            Ls8Mnem::PRA => self.pra(inst),
            Ls8Mnem::CALL => self.call(inst),
            Ls8Mnem::RET => self.ret(inst),
            Ls8Mnem::JMP => self.jmp(inst),
            Ls8Mnem::JEQ => self.jeq(inst),
            Ls8Mnem::JNE => self.jne(inst),
            Ls8Mnem::JGT => self.jgt(inst),
            Ls8Mnem::JGE => self.jge(inst),
            Ls8Mnem::JLT => self.jlt(inst),
            Ls8Mnem::JLE => self.jle(inst),
            Ls8Mnem::IRET => self.iret(inst),
            Ls8Mnem::ADD
            | Ls8Mnem::SUB
            | Ls8Mnem::MUL
            | Ls8Mnem::DIV
            | Ls8Mnem::MOD
            | Ls8Mnem::AND
            | Ls8Mnem::OR
            | Ls8Mnem::XOR
            | Ls8Mnem::NOT
            | Ls8Mnem::SHL
            | Ls8Mnem::SHR
            | Ls8Mnem::CMP => self.alu(inst),
        }
    }

    ///
    /// Services the lowest pending interrupt line, if any. Pending lines
    /// are the AND of the mask and status registers; servicing disables
    /// further interrupts, clears the line, saves the full CPU context on
    /// the stack and vectors to the handler address. One line per loop
    /// iteration; the rest stay latched.
    ///
    fn service_interrupt(&mut self) -> Result<bool, Ls8Fault> {
        let pending = self.regs.get(REG_IM)? & self.regs.get(REG_IS)?;
        if pending == 0 {
            return Ok(false);
        }

        for line in 0..8u8 {
            let mask = 1 << line;
            if pending & mask == 0 {
                continue;
            }

            debug!("servicing interrupt line {}", line);
            self.ie = false;

            let is = self.regs.get(REG_IS)?;
            self.regs.set(REG_IS, is & !mask)?;

            // Context save: PC, Flags, then R0 through R6. IRET pops the
            // same sequence in reverse.
            self.push_byte(self.pc)?;
            self.push_byte(self.flags.bits())?;
            for idx in 0..7 {
                let val = self.regs.get(idx)?;
                self.push_byte(val)?;
            }

            self.pc = self.ram.read(memmap::VECTOR_TABLE_BASE + line as usize)?;
            return Ok(true);
        }

        Ok(false)
    }

    pub(crate) fn push_byte(&mut self, val: u8) -> Result<(), Ls8Fault> {
        self.sp = self.sp.wrapping_sub(1);
        self.ram.write(self.sp as usize, val)
    }

    pub(crate) fn pop_byte(&mut self) -> Result<u8, Ls8Fault> {
        let val = self.ram.read(self.sp as usize)?;
        self.sp = self.sp.wrapping_add(1);
        Ok(val)
    }

    fn trace_state(&self) {
        let r = self.regs.snapshot();
        trace!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {:02X} {:02X} {:02X} {:02X} {:02X} {:02X} {:02X} {:02X}",
            self.pc,
            self.ram.read(self.pc as usize).unwrap_or(0),
            self.ram.read(self.pc.wrapping_add(1) as usize).unwrap_or(0),
            self.ram.read(self.pc.wrapping_add(2) as usize).unwrap_or(0),
            r[0],
            r[1],
            r[2],
            r[3],
            r[4],
            r[5],
            r[6],
            r[7]
        );
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn fl(&self) -> u8 {
        self.flags.bits()
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.ie
    }

    pub fn read(&self, addr: usize) -> Result<u8, Ls8Fault> {
        self.ram.read(addr)
    }

    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Ls8Fault> {
        self.ram.write(addr, val)
    }

    pub fn reg_read(&self, idx: usize) -> Result<u8, Ls8Fault> {
        self.regs.get(idx)
    }

    pub fn reg_write(&mut self, idx: usize, val: u8) -> Result<(), Ls8Fault> {
        self.regs.set(idx, val)
    }
}
