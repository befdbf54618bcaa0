use super::Bus;

/// Flat 64KB read/write memory with no devices mapped.
pub struct Ram {
    pub memory: [u8; 0x10000],
}

impl Ram {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }

    /// Copy `data` into memory starting at `addr`, wrapping past 0xFFFF.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.memory[addr.wrapping_add(offset as u16) as usize] = byte;
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Ram {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_big_endian() {
        let mut ram = Ram::new();
        ram.write16(0x1000, 0xBEEF);
        assert_eq!(ram.memory[0x1000], 0xBE);
        assert_eq!(ram.memory[0x1001], 0xEF);
        assert_eq!(ram.read16(0x1000), 0xBEEF);
    }

    #[test]
    fn word_access_wraps_at_top_of_memory() {
        let mut ram = Ram::new();
        ram.write16(0xFFFF, 0x1234);
        assert_eq!(ram.memory[0xFFFF], 0x12);
        assert_eq!(ram.memory[0x0000], 0x34);
        assert_eq!(ram.read16(0xFFFF), 0x1234);
    }

    #[test]
    fn load_wraps_past_end() {
        let mut ram = Ram::new();
        ram.load(0xFFFE, &[0x01, 0x02, 0x03]);
        assert_eq!(ram.memory[0xFFFE], 0x01);
        assert_eq!(ram.memory[0xFFFF], 0x02);
        assert_eq!(ram.memory[0x0000], 0x03);
    }
}
