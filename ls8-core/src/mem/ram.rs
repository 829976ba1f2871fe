use log::trace;

use crate::consts::MEM_SIZE;
use crate::errors::Ls8Fault;

/// Flat LS-8 memory: 256 byte-wide cells, zeroed at construction. The top
/// of the address space doubles as the stack region and the last eight
/// cells hold the interrupt vector table.
pub struct Ls8Ram {
    cells: [u8; MEM_SIZE],
}

impl Ls8Ram {
    ///
    /// Constructor for the Ls8Ram structure. This will create a blank RAM
    /// state of all zeros.
    ///
    pub fn new() -> Ls8Ram {
        Ls8Ram {
            cells: [0; MEM_SIZE],
        }
    }

    ///
    /// Handles byte read requests to a given memory location.
    ///
    /// # Arguments
    ///
    ///  - `addr` - Address to read from. Addresses at or beyond the 256-byte
    ///    capacity are a bounds fault.
    ///
    /// # Return Value
    ///
    ///  - `value` - u8 - Value located at `addr`
    ///
    pub fn read(&self, addr: usize) -> Result<u8, Ls8Fault> {
        match self.cells.get(addr) {
            Some(val) => {
                trace!("RAM Read: {:#04x}: {:#04x}", addr, val);
                Ok(*val)
            }
            None => Err(Ls8Fault::Bounds(addr)),
        }
    }

    ///
    /// Handles byte writes to a given memory location.
    ///
    /// # Arguments
    ///
    ///  - `addr` - Address to write to. Addresses at or beyond the 256-byte
    ///    capacity are a bounds fault.
    ///  - `val` - Value to write at `addr`.
    ///
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Ls8Fault> {
        if addr >= MEM_SIZE {
            return Err(Ls8Fault::Bounds(addr));
        }
        trace!("RAM Write: {:#04x}: {:#04x}", addr, val);
        self.cells[addr] = val;
        Ok(())
    }
}

#[cfg(test)]
mod ram_tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let ram = Ls8Ram::new();
        for addr in 0..MEM_SIZE {
            assert_eq!(ram.read(addr).unwrap(), 0);
        }
    }

    #[test]
    fn write_read_roundtrip() {
        let mut ram = Ls8Ram::new();
        for addr in 0..MEM_SIZE {
            ram.write(addr, (addr & 0xFF) as u8).unwrap();
        }
        for addr in 0..MEM_SIZE {
            assert_eq!(ram.read(addr).unwrap(), (addr & 0xFF) as u8);
        }
    }

    #[test]
    fn out_of_range_address_faults() {
        let mut ram = Ls8Ram::new();
        assert_eq!(ram.read(MEM_SIZE), Err(Ls8Fault::Bounds(MEM_SIZE)));
        assert_eq!(ram.write(MEM_SIZE, 0), Err(Ls8Fault::Bounds(MEM_SIZE)));
        assert_eq!(ram.read(0x1000), Err(Ls8Fault::Bounds(0x1000)));
    }
}
