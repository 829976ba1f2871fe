use crate::cpu::Ls8Cpu;
use crate::errors::Ls8Fault;
use crate::mem::ManualClock;
use crate::periph::BufferConsole;

mod alu;

/// Runs `program` on a fresh CPU until it halts or faults, returning the
/// run result and everything the program printed.
pub fn run_program(program: &[u8]) -> (Result<(), Ls8Fault>, String) {
    let mut console = BufferConsole::new();
    let mut clock = ManualClock::new();

    let result = {
        let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
        match cpu.load(program) {
            Ok(()) => cpu.run(),
            Err(fault) => Err(fault),
        }
    };

    (result, console.take())
}
