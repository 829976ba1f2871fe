use super::run_program;
use crate::cpu::Ls8Cpu;
use crate::errors::Ls8Fault;
use crate::instr::{
    OP_ADD, OP_AND, OP_CMP, OP_DIV, OP_HLT, OP_LDI, OP_MOD, OP_MUL, OP_NOT, OP_OR, OP_PRN, OP_SHL,
    OP_SHR, OP_SUB, OP_XOR,
};
use crate::mem::ManualClock;
use crate::periph::BufferConsole;
use crate::regs::{FL_EQ, FL_GT, FL_LT};

/// Runs a two-register ALU instruction with the given inputs and returns
/// the value left in R0.
fn alu_result(op: u8, a: u8, b: u8) -> u8 {
    let program = [OP_LDI, 0, a, OP_LDI, 1, b, op, 0, 1, OP_HLT];

    let mut console = BufferConsole::new();
    let mut clock = ManualClock::new();
    let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
    cpu.load(&program).unwrap();
    cpu.run().unwrap();
    cpu.reg_read(0).unwrap()
}

#[test]
fn add_prints_seventeen() {
    let program = [
        OP_LDI, 0, 8, // LDI R0,8
        OP_LDI, 1, 9, // LDI R1,9
        OP_ADD, 0, 1, // ADD R0,R1
        OP_PRN, 0, // PRN R0
        OP_HLT,
    ];
    let (res, out) = run_program(&program);
    assert!(res.is_ok());
    assert_eq!(out, "17");
}

#[test]
fn add_then_sub_restores_original() {
    let setup = [(0u8, 0u8), (1, 255), (200, 100), (255, 255), (17, 42)];

    for (a, b) in setup.iter() {
        let program = [
            OP_LDI, 0, *a, OP_LDI, 1, *b, OP_ADD, 0, 1, OP_SUB, 0, 1, OP_HLT,
        ];

        let mut console = BufferConsole::new();
        let mut clock = ManualClock::new();
        let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
        cpu.load(&program).unwrap();
        cpu.run().unwrap();
        assert_eq!(
            cpu.reg_read(0).unwrap(),
            *a,
            "ADD/SUB roundtrip failed for {} {}",
            a,
            b
        );
    }
}

#[test]
fn add_wraps_modulo_256() {
    assert_eq!(alu_result(OP_ADD, 200, 100), 44);
    assert_eq!(alu_result(OP_ADD, 255, 1), 0);
}

#[test]
fn sub_wraps_below_zero() {
    // Decrementing zero wraps to 255.
    assert_eq!(alu_result(OP_SUB, 0, 1), 255);
    assert_eq!(alu_result(OP_SUB, 5, 9), 252);
}

#[test]
fn mul_wraps_modulo_256() {
    assert_eq!(alu_result(OP_MUL, 8, 9), 72);
    assert_eq!(alu_result(OP_MUL, 16, 32), 0);
    assert_eq!(alu_result(OP_MUL, 100, 3), 44);
}

#[test]
fn div_truncates_toward_zero() {
    assert_eq!(alu_result(OP_DIV, 7, 2), 3);
    assert_eq!(alu_result(OP_DIV, 255, 16), 15);
}

#[test]
fn mod_basic() {
    assert_eq!(alu_result(OP_MOD, 7, 2), 1);
    assert_eq!(alu_result(OP_MOD, 100, 10), 0);
}

#[test]
fn div_by_zero_faults_and_stops() {
    // The PRN after the DIV must never run.
    let program = [
        OP_LDI, 0, 5, OP_LDI, 1, 0, OP_DIV, 0, 1, OP_PRN, 0, OP_HLT,
    ];
    let (res, out) = run_program(&program);
    assert_eq!(res, Err(Ls8Fault::Arithmetic("division by zero")));
    assert_eq!(out, "");
}

#[test]
fn mod_by_zero_faults() {
    let program = [OP_LDI, 0, 5, OP_LDI, 1, 0, OP_MOD, 0, 1, OP_HLT];
    let (res, _out) = run_program(&program);
    assert_eq!(res, Err(Ls8Fault::Arithmetic("modulo by zero")));
}

#[test]
fn bitwise_ops() {
    assert_eq!(alu_result(OP_AND, 0b1100, 0b1010), 0b1000);
    assert_eq!(alu_result(OP_OR, 0b1100, 0b1010), 0b1110);
    assert_eq!(alu_result(OP_XOR, 0b1100, 0b1010), 0b0110);
}

#[test]
fn not_complements_in_place() {
    let program = [OP_LDI, 0, 0b10100101, OP_NOT, 0, OP_HLT];

    let mut console = BufferConsole::new();
    let mut clock = ManualClock::new();
    let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
    cpu.load(&program).unwrap();
    cpu.run().unwrap();
    assert_eq!(cpu.reg_read(0).unwrap(), 0b01011010);
}

#[test]
fn shifts_are_eight_bit() {
    assert_eq!(alu_result(OP_SHL, 0b00000101, 1), 0b00001010);
    assert_eq!(alu_result(OP_SHL, 0b10000001, 1), 0b00000010);
    assert_eq!(alu_result(OP_SHR, 0b10000001, 1), 0b01000000);

    // Shifting by the full register width or more clears the register.
    assert_eq!(alu_result(OP_SHL, 0xFF, 8), 0);
    assert_eq!(alu_result(OP_SHR, 0xFF, 200), 0);
}

#[test]
fn cmp_sets_exactly_one_flag() {
    let setup = [(5u8, 5u8, FL_EQ), (3, 9, FL_LT), (9, 3, FL_GT)];

    for (a, b, expect) in setup.iter() {
        let program = [OP_LDI, 0, *a, OP_LDI, 1, *b, OP_CMP, 0, 1, OP_HLT];

        let mut console = BufferConsole::new();
        let mut clock = ManualClock::new();
        let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
        cpu.load(&program).unwrap();
        cpu.run().unwrap();

        assert_eq!(cpu.fl(), *expect, "CMP {} {} flag mismatch", a, b);
        assert_eq!(cpu.fl().count_ones(), 1);
    }
}

#[test]
fn cmp_does_not_modify_registers() {
    let program = [OP_LDI, 0, 3, OP_LDI, 1, 9, OP_CMP, 0, 1, OP_HLT];

    let mut console = BufferConsole::new();
    let mut clock = ManualClock::new();
    let mut cpu = Ls8Cpu::new(&mut console, &mut clock);
    cpu.load(&program).unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.reg_read(0).unwrap(), 3);
    assert_eq!(cpu.reg_read(1).unwrap(), 9);
}

#[test]
fn alu_rejects_bad_register_index() {
    // Operand byte 9 is not a register.
    let program = [OP_ADD, 0, 9, OP_HLT];
    let (res, _out) = run_program(&program);
    assert_eq!(res, Err(Ls8Fault::Bounds(9)));
}
