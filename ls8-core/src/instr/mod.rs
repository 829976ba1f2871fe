pub mod alu;
pub mod cf;
pub mod intrpt;
pub mod io;
pub mod ldst;

pub use alu::Ls8Alu;
pub use cf::Ls8ControlFlow;
pub use intrpt::Ls8Interrupt;
pub use io::Ls8Io;
pub use ldst::Ls8LoadStore;

#[cfg(test)]
pub mod tests;

/* Opcode byte values. In the LS-8 encoding the upper two bits carry the
 * operand count, bit 5 marks ALU instructions and bit 4 marks instructions
 * that set the PC themselves. Dispatch never decodes those fields at
 * runtime; the tables below are the source of truth and the encoding is
 * checked against them in the decode tests. */
pub const OP_HLT: u8 = 0b00000001;
pub const OP_RET: u8 = 0b00010001;
pub const OP_IRET: u8 = 0b00010011;
pub const OP_PUSH: u8 = 0b01000101;
pub const OP_POP: u8 = 0b01000110;
pub const OP_PRN: u8 = 0b01000111;
pub const OP_PRA: u8 = 0b01001000;
pub const OP_CALL: u8 = 0b01010000;
pub const OP_JMP: u8 = 0b01010100;
pub const OP_JEQ: u8 = 0b01010101;
pub const OP_JNE: u8 = 0b01010110;
pub const OP_JGT: u8 = 0b01010111;
pub const OP_JLT: u8 = 0b01011000;
pub const OP_JLE: u8 = 0b01011001;
pub const OP_JGE: u8 = 0b01011010;
pub const OP_NOT: u8 = 0b01101001;
pub const OP_LDI: u8 = 0b10000010;
pub const OP_ST: u8 = 0b10000100;
pub const OP_ADD: u8 = 0b10100000;
pub const OP_SUB: u8 = 0b10100001;
pub const OP_MUL: u8 = 0b10100010;
pub const OP_DIV: u8 = 0b10100011;
pub const OP_MOD: u8 = 0b10100100;
pub const OP_CMP: u8 = 0b10100111;
pub const OP_AND: u8 = 0b10101000;
pub const OP_OR: u8 = 0b10101010;
pub const OP_XOR: u8 = 0b10101011;
pub const OP_SHL: u8 = 0b10101100;
pub const OP_SHR: u8 = 0b10101101;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Ls8Mnem {
    HLT,
    LDI,
    PRN,
    PRA,
    ADD,
    SUB,
    MUL,
    DIV,
    MOD,
    AND,
    OR,
    XOR,
    NOT,
    SHL,
    SHR,
    CMP,
    PUSH,
    POP,
    CALL,
    RET,
    JMP,
    JEQ,
    JNE,
    JGT,
    JGE,
    JLT,
    JLE,
    ST,
    IRET,
}

impl Ls8Mnem {
    /// Maps an opcode byte to its mnemonic. `None` means the opcode is not
    /// in the dispatch table and the CPU must halt with an
    /// invalid-instruction fault.
    pub fn decode(opcode: u8) -> Option<Ls8Mnem> {
        match opcode {
            OP_HLT => Some(Ls8Mnem::HLT),
            OP_LDI => Some(Ls8Mnem::LDI),
            OP_PRN => Some(Ls8Mnem::PRN),
            OP_PRA => Some(Ls8Mnem::PRA),
            OP_ADD => Some(Ls8Mnem::ADD),
            OP_SUB => Some(Ls8Mnem::SUB),
            OP_MUL => Some(Ls8Mnem::MUL),
            OP_DIV => Some(Ls8Mnem::DIV),
            OP_MOD => Some(Ls8Mnem::MOD),
            OP_AND => Some(Ls8Mnem::AND),
            OP_OR => Some(Ls8Mnem::OR),
            OP_XOR => Some(Ls8Mnem::XOR),
            OP_NOT => Some(Ls8Mnem::NOT),
            OP_SHL => Some(Ls8Mnem::SHL),
            OP_SHR => Some(Ls8Mnem::SHR),
            OP_CMP => Some(Ls8Mnem::CMP),
            OP_PUSH => Some(Ls8Mnem::PUSH),
            OP_POP => Some(Ls8Mnem::POP),
            OP_CALL => Some(Ls8Mnem::CALL),
            OP_RET => Some(Ls8Mnem::RET),
            OP_JMP => Some(Ls8Mnem::JMP),
            OP_JEQ => Some(Ls8Mnem::JEQ),
            OP_JNE => Some(Ls8Mnem::JNE),
            OP_JGT => Some(Ls8Mnem::JGT),
            OP_JGE => Some(Ls8Mnem::JGE),
            OP_JLT => Some(Ls8Mnem::JLT),
            OP_JLE => Some(Ls8Mnem::JLE),
            OP_ST => Some(Ls8Mnem::ST),
            OP_IRET => Some(Ls8Mnem::IRET),
            _ => None,
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operands(&self) -> u8 {
        match self {
            Ls8Mnem::HLT | Ls8Mnem::RET | Ls8Mnem::IRET => 0,

            Ls8Mnem::PRN
            | Ls8Mnem::PRA
            | Ls8Mnem::PUSH
            | Ls8Mnem::POP
            | Ls8Mnem::CALL
            | Ls8Mnem::JMP
            | Ls8Mnem::JEQ
            | Ls8Mnem::JNE
            | Ls8Mnem::JGT
            | Ls8Mnem::JGE
            | Ls8Mnem::JLT
            | Ls8Mnem::JLE
            | Ls8Mnem::NOT => 1,

            Ls8Mnem::LDI
            | Ls8Mnem::ST
            | Ls8Mnem::ADD
            | Ls8Mnem::SUB
            | Ls8Mnem::MUL
            | Ls8Mnem::DIV
            | Ls8Mnem::MOD
            | Ls8Mnem::AND
            | Ls8Mnem::OR
            | Ls8Mnem::XOR
            | Ls8Mnem::SHL
            | Ls8Mnem::SHR
            | Ls8Mnem::CMP => 2,
        }
    }

    /// Whether the handler sets the PC itself. When false, the dispatcher
    /// advances the PC past the opcode and its operands after execution.
    /// Conditional jumps own the PC in both arms, advancing it manually
    /// when the branch falls through.
    pub fn sets_pc(&self) -> bool {
        match self {
            Ls8Mnem::CALL
            | Ls8Mnem::RET
            | Ls8Mnem::JMP
            | Ls8Mnem::JEQ
            | Ls8Mnem::JNE
            | Ls8Mnem::JGT
            | Ls8Mnem::JGE
            | Ls8Mnem::JLT
            | Ls8Mnem::JLE
            | Ls8Mnem::IRET => true,
            _ => false,
        }
    }
}

/// One decoded instruction: the opcode and both potential operand bytes,
/// fetched together from PC, PC+1 and PC+2.
#[derive(Debug)]
pub struct Ls8Inst {
    pub pc: u8,
    pub opcode: u8,
    pub mnem: Ls8Mnem,
    pub a: u8,
    pub b: u8,
}

impl Ls8Inst {
    /// First operand interpreted as a register index.
    pub fn reg_a(&self) -> usize {
        self.a as usize
    }

    /// Second operand interpreted as a register index.
    pub fn reg_b(&self) -> usize {
        self.b as usize
    }

    /// Second operand interpreted as an immediate value.
    pub fn imm(&self) -> u8 {
        self.b
    }
}

#[cfg(test)]
mod decode_tests {
    use super::*;

    const TABLE: &[(u8, Ls8Mnem)] = &[
        (OP_HLT, Ls8Mnem::HLT),
        (OP_LDI, Ls8Mnem::LDI),
        (OP_PRN, Ls8Mnem::PRN),
        (OP_PRA, Ls8Mnem::PRA),
        (OP_ADD, Ls8Mnem::ADD),
        (OP_SUB, Ls8Mnem::SUB),
        (OP_MUL, Ls8Mnem::MUL),
        (OP_DIV, Ls8Mnem::DIV),
        (OP_MOD, Ls8Mnem::MOD),
        (OP_AND, Ls8Mnem::AND),
        (OP_OR, Ls8Mnem::OR),
        (OP_XOR, Ls8Mnem::XOR),
        (OP_NOT, Ls8Mnem::NOT),
        (OP_SHL, Ls8Mnem::SHL),
        (OP_SHR, Ls8Mnem::SHR),
        (OP_CMP, Ls8Mnem::CMP),
        (OP_PUSH, Ls8Mnem::PUSH),
        (OP_POP, Ls8Mnem::POP),
        (OP_CALL, Ls8Mnem::CALL),
        (OP_RET, Ls8Mnem::RET),
        (OP_JMP, Ls8Mnem::JMP),
        (OP_JEQ, Ls8Mnem::JEQ),
        (OP_JNE, Ls8Mnem::JNE),
        (OP_JGT, Ls8Mnem::JGT),
        (OP_JGE, Ls8Mnem::JGE),
        (OP_JLT, Ls8Mnem::JLT),
        (OP_JLE, Ls8Mnem::JLE),
        (OP_ST, Ls8Mnem::ST),
        (OP_IRET, Ls8Mnem::IRET),
    ];

    #[test]
    fn decode_maps_every_table_entry() {
        for (opcode, mnem) in TABLE.iter() {
            assert_eq!(
                Ls8Mnem::decode(*opcode),
                Some(*mnem),
                "Decode failed for opcode {:#04x}",
                opcode
            );
        }
    }

    #[test]
    fn decode_rejects_everything_else() {
        for opcode in 0..=255u8 {
            let known = TABLE.iter().any(|(op, _)| *op == opcode);
            assert_eq!(
                Ls8Mnem::decode(opcode).is_some(),
                known,
                "Decode table mismatch for opcode {:#04x}",
                opcode
            );
        }
    }

    #[test]
    fn operand_count_matches_encoding() {
        // The upper two bits of every LS-8 opcode carry the operand count.
        for (opcode, mnem) in TABLE.iter() {
            assert_eq!(
                mnem.operands(),
                (opcode >> 6) & 0b11,
                "Operand count mismatch for {:?}",
                mnem
            );
        }
    }

    #[test]
    fn sets_pc_matches_encoding() {
        // Bit 4 of every LS-8 opcode marks instructions that set the PC.
        for (opcode, mnem) in TABLE.iter() {
            assert_eq!(
                mnem.sets_pc(),
                opcode & 0b00010000 != 0,
                "sets_pc mismatch for {:?}",
                mnem
            );
        }
    }
}
