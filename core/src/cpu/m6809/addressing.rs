use super::opcodes::Instruction;
use super::{CpuError, M6809, Register};
use crate::core::Bus;

/// Addressing mode declared by an opcode table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Operand is a register (or there is none); no operand bytes.
    Inherent,
    /// One operand byte follows the opcode.
    Immediate8,
    /// Two operand bytes follow the opcode.
    Immediate16,
    /// One byte, combined with DP into the effective address.
    Direct,
    /// Two-byte absolute address.
    Extended,
    /// Postbyte plus 0-2 offset bytes.
    Indexed,
    /// Signed 8-bit branch offset from the next instruction.
    Relative,
}

/// What an instruction operates on once its addressing bytes are consumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Register(Register),
    /// Effective address. For immediate modes this is the address of the
    /// operand bytes; for relative mode it is the branch target.
    Address(u16),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub operand: Operand,
    pub extra_cycles: u32,
}

impl Resolved {
    fn address(addr: u16, extra_cycles: u32) -> Self {
        Self {
            operand: Operand::Address(addr),
            extra_cycles,
        }
    }
}

impl M6809 {
    /// Consume the addressing bytes for `instruction` and produce its operand.
    ///
    /// PC is left pointing at the next instruction. `start` is the address of
    /// the opcode, used only for error reports.
    pub(crate) fn resolve<B: Bus + ?Sized>(
        &mut self,
        instruction: &Instruction,
        bus: &mut B,
        start: u16,
    ) -> Result<Resolved, CpuError> {
        let resolved = match instruction.mode {
            Mode::Inherent => Resolved {
                operand: instruction
                    .register
                    .map_or(Operand::None, Operand::Register),
                extra_cycles: 0,
            },
            Mode::Immediate8 => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Resolved::address(addr, 0)
            }
            Mode::Immediate16 => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(2);
                Resolved::address(addr, 0)
            }
            Mode::Direct => {
                let low = self.fetch8(bus);
                Resolved::address(u16::from_be_bytes([self.dp, low]), 0)
            }
            Mode::Extended => {
                let addr = self.fetch16(bus);
                Resolved::address(addr, 0)
            }
            Mode::Relative => {
                let offset = self.fetch8(bus) as i8;
                Resolved::address(self.pc.wrapping_add(offset as i16 as u16), 0)
            }
            Mode::Indexed => {
                let (addr, extra) = self.indexed_address(bus, start)?;
                Resolved::address(addr, extra)
            }
        };
        Ok(resolved)
    }

    /// Returns the value of the index register selected by 2-bit code.
    /// 0=X, 1=Y, 2=U, 3=S.
    #[inline]
    fn indexed_reg_value(&self, sel: u8) -> u16 {
        match sel & 0x03 {
            0 => self.x,
            1 => self.y,
            2 => self.u,
            _ => self.s,
        }
    }

    /// Sets the index register selected by 2-bit code.
    #[inline]
    fn set_indexed_reg(&mut self, sel: u8, val: u16) {
        match sel & 0x03 {
            0 => self.x = val,
            1 => self.y = val,
            2 => self.u = val,
            _ => self.s = val,
        }
    }

    /// Sign-extends a 5-bit value to 16-bit.
    #[inline]
    fn sign_extend_5(val: u8) -> u16 {
        if val & 0x10 != 0 {
            (val as u16) | 0xFFE0
        } else {
            val as u16
        }
    }

    /// Decode an indexed postbyte (and any offset bytes) into an effective
    /// address plus the extra cycles the form costs.
    ///
    /// Postbyte layout: bit 7 clear = 5-bit offset in bits 4-0. Otherwise
    /// bits 6-5 select X/Y/U/S, bit 4 requests indirection, bits 3-0 pick
    /// the form. Indirection reads the final address from the computed one
    /// and costs three more cycles.
    fn indexed_address<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        start: u16,
    ) -> Result<(u16, u32), CpuError> {
        let postbyte = self.fetch8(bus);

        if postbyte & 0x80 == 0 {
            let reg = self.indexed_reg_value(postbyte >> 5);
            let offset = Self::sign_extend_5(postbyte & 0x1F);
            return Ok((reg.wrapping_add(offset), 1));
        }

        let reg_sel = (postbyte >> 5) & 0x03;
        let indirect = postbyte & 0x10 != 0;
        let reg = self.indexed_reg_value(reg_sel);

        let (addr, extra) = match postbyte & 0x0F {
            0x00 if !indirect => {
                // ,R+
                self.set_indexed_reg(reg_sel, reg.wrapping_add(1));
                (reg, 2)
            }
            0x01 => {
                // ,R++
                self.set_indexed_reg(reg_sel, reg.wrapping_add(2));
                (reg, 3)
            }
            0x02 if !indirect => {
                // ,-R
                let new_reg = reg.wrapping_sub(1);
                self.set_indexed_reg(reg_sel, new_reg);
                (new_reg, 2)
            }
            0x03 => {
                // ,--R
                let new_reg = reg.wrapping_sub(2);
                self.set_indexed_reg(reg_sel, new_reg);
                (new_reg, 3)
            }
            0x04 => (reg, 0),
            0x05 => (reg.wrapping_add(self.b as i8 as i16 as u16), 1),
            0x06 => (reg.wrapping_add(self.a as i8 as i16 as u16), 1),
            0x08 => {
                let offset = self.fetch8(bus) as i8;
                (reg.wrapping_add(offset as i16 as u16), 1)
            }
            0x09 => {
                let offset = self.fetch16(bus);
                (reg.wrapping_add(offset), 4)
            }
            0x0B => (reg.wrapping_add(self.d()), 4),
            0x0C => {
                // n8,PCR: relative to PC after the offset byte
                let offset = self.fetch8(bus) as i8;
                (self.pc.wrapping_add(offset as i16 as u16), 1)
            }
            0x0D => {
                let offset = self.fetch16(bus);
                (self.pc.wrapping_add(offset), 5)
            }
            0x0F if indirect => {
                // [n16]; the indirect surcharge below brings it to 5
                let addr = self.fetch16(bus);
                (addr, 2)
            }
            _ => return Err(CpuError::InvalidPostbyte { postbyte, pc: start }),
        };

        if indirect {
            Ok((bus.read16(addr), extra + 3))
        } else {
            Ok((addr, extra))
        }
    }
}
