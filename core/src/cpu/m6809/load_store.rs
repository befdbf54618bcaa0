use super::alu::{unary, word};
use super::{M6809, Register};
use crate::core::Bus;

impl M6809 {
    /// LDA/LDB: N, Z from the loaded byte, V cleared, C unaffected.
    pub(crate) fn load8<B: Bus + ?Sized>(&mut self, reg: Register, addr: u16, bus: &mut B) {
        let value = bus.read8(addr);
        self.set_reg(reg, value as u16);
        self.cc.apply(unary::tst(value));
    }

    /// STA/STB: same flags as the load.
    pub(crate) fn store8<B: Bus + ?Sized>(&mut self, reg: Register, addr: u16, bus: &mut B) {
        let value = self.reg(reg) as u8;
        bus.write8(addr, value);
        self.cc.apply(unary::tst(value));
    }

    /// LDD/LDX/LDY/LDU/LDS: N from bit 15, Z, V cleared.
    pub(crate) fn load16<B: Bus + ?Sized>(&mut self, reg: Register, addr: u16, bus: &mut B) {
        let value = bus.read16(addr);
        self.set_reg(reg, value);
        self.cc.apply(word::tst16(value));
    }

    pub(crate) fn store16<B: Bus + ?Sized>(&mut self, reg: Register, addr: u16, bus: &mut B) {
        let value = self.reg(reg);
        bus.write16(addr, value);
        self.cc.apply(word::tst16(value));
    }

    /// LEAX/LEAY set Z from the new value; LEAS/LEAU touch no flags.
    pub(crate) fn load_effective_address(&mut self, reg: Register, addr: u16) {
        self.set_reg(reg, addr);
        if matches!(reg, Register::X | Register::Y) {
            self.cc.z = addr == 0;
        }
    }
}
