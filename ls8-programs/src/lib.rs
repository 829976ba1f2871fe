//! Built-in LS-8 demo programs, assembled by hand from the classic `.ls8`
//! sources. Byte-for-byte what the text loader produces for the copies
//! under `demos/`.

/// Prints `8`.
pub const PRINT8: &[u8] = &[
    0b10000010, 0b00000000, 0b00001000, // LDI R0,8
    0b01000111, 0b00000000, // PRN R0
    0b00000001, // HLT
];

/// Prints `72`.
pub const MULT: &[u8] = &[
    0b10000010, 0b00000000, 0b00001000, // LDI R0,8
    0b10000010, 0b00000001, 0b00001001, // LDI R1,9
    0b10100010, 0b00000000, 0b00000001, // MUL R0,R1
    0b01000111, 0b00000000, // PRN R0
    0b00000001, // HLT
];

/// Exercises the stack; prints `2` then `4`.
pub const STACK: &[u8] = &[
    0b10000010, 0b00000000, 0b00000001, // LDI R0,1
    0b10000010, 0b00000001, 0b00000010, // LDI R1,2
    0b01000101, 0b00000000, // PUSH R0
    0b01000101, 0b00000001, // PUSH R1
    0b10000010, 0b00000000, 0b00000011, // LDI R0,3
    0b01000110, 0b00000000, // POP R0
    0b01000111, 0b00000000, // PRN R0
    0b10000010, 0b00000000, 0b00000100, // LDI R0,4
    0b01000101, 0b00000000, // PUSH R0
    0b01000110, 0b00000010, // POP R2
    0b01000111, 0b00000010, // PRN R2
    0b00000001, // HLT
];

/// Calls a double-and-print subroutine three times; prints `20`, `30`
/// and `36`.
pub const CALL: &[u8] = &[
    0b10000010, 0b00000001, 0b00010011, // 0:  LDI R1,19
    0b10000010, 0b00000000, 0b00001010, // 3:  LDI R0,10
    0b01010000, 0b00000001, // 6:  CALL R1
    0b10000010, 0b00000000, 0b00001111, // 8:  LDI R0,15
    0b01010000, 0b00000001, // 11: CALL R1
    0b10000010, 0b00000000, 0b00010010, // 13: LDI R0,18
    0b01010000, 0b00000001, // 16: CALL R1
    0b00000001, // 18: HLT
    0b10100000, 0b00000000, 0b00000000, // 19: ADD R0,R0
    0b01000111, 0b00000000, // 22: PRN R0
    0b00010001, // 24: RET
];

/// Installs a timer interrupt handler and spins; prints `A` once per
/// second until interrupted.
pub const INTERRUPTS: &[u8] = &[
    0b10000010, 0b00000000, 0b11111000, // 0:  LDI R0,0xF8
    0b10000010, 0b00000001, 0b00010001, // 3:  LDI R1,17
    0b10000100, 0b00000000, 0b00000001, // 6:  ST R0,R1
    0b10000010, 0b00000101, 0b00000001, // 9:  LDI R5,1
    0b10000010, 0b00000000, 0b00001111, // 12: LDI R0,15
    0b01010100, 0b00000000, // 15: JMP R0
    0b10000010, 0b00000011, 0b01000001, // 17: LDI R3,65
    0b01001000, 0b00000011, // 20: PRA R3
    0b00010011, // 22: IRET
];
