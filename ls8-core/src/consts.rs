/* Total addressable memory of the LS-8, in bytes */
pub const MEM_SIZE: usize = 256;

pub mod cpu {
    /* Number of general-purpose registers */
    pub const REG_MAX: usize = 8;

    /* Reserved registers */
    pub const REG_IM: usize = 5; // interrupt mask
    pub const REG_IS: usize = 6; // interrupt status
    pub const REG_SP: usize = 7; // stack pointer seed

    /* Boot value of the stack pointer, and of R7 which seeds it */
    pub const SP_INIT: u8 = 0xF4;

    /* Interrupt line numbers */
    pub const IRQ_TIMER: u8 = 0;
}

pub mod memmap {
    /* Interrupt vector table: one handler address per line, line 0 at the
     * base, growing upward through 0xFF */
    pub const VECTOR_TABLE_BASE: usize = 0xF8;
}

pub mod timer {
    /* The timer interrupt fires once per second of clock time */
    pub const TIMER_PERIOD_MS: u64 = 1000;
}
