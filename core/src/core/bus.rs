/// Byte-addressable 16-bit address space seen by the CPU.
///
/// Implementors only supply single-byte access. Every `u16` is a valid
/// address, so there is no out-of-range condition; word accesses wrap from
/// 0xFFFF to 0x0000. Reads take `&mut self` because a memory-mapped device
/// may change state when read.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, data: u8);

    /// Big-endian word read: high byte at `addr`, low byte at `addr + 1`.
    fn read16(&mut self, addr: u16) -> u16 {
        let high = self.read8(addr);
        let low = self.read8(addr.wrapping_add(1));
        u16::from_be_bytes([high, low])
    }

    /// Big-endian word write: high byte at `addr`, low byte at `addr + 1`.
    fn write16(&mut self, addr: u16, data: u16) {
        let [high, low] = data.to_be_bytes();
        self.write8(addr, high);
        self.write8(addr.wrapping_add(1), low);
    }
}
