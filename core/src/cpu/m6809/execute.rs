use super::addressing::Operand;
use super::alu::{AluResult, binary, shift, unary, word};
use super::opcodes::{self, Instruction, Op, Page};
use super::{ConditionCodes, CpuError, M6809, Register};
use crate::core::Bus;

impl M6809 {
    /// FETCH: read the opcode (and page byte, if prefixed) and look it up.
    pub(crate) fn decode<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        start: u16,
    ) -> Result<&'static Instruction, CpuError> {
        let first = self.fetch8(bus);
        let (page, opcode) = match Page::from_prefix(first) {
            Some(page) => (page, self.fetch8(bus)),
            None => (Page::One, first),
        };
        opcodes::lookup(page, opcode).ok_or(CpuError::InvalidOpcode {
            opcode: page.encode(opcode),
            pc: start,
        })
    }

    /// EXECUTE: run the ALU operation on the resolved operand and write back.
    pub(crate) fn execute<B: Bus + ?Sized>(
        &mut self,
        instruction: &Instruction,
        operand: Operand,
        bus: &mut B,
    ) {
        match instruction.op {
            Op::Neg => self.modify(operand, bus, |v, _| unary::neg(v)),
            Op::Com => self.modify(operand, bus, |v, _| unary::com(v)),
            Op::Lsr => self.modify(operand, bus, |v, _| shift::lsr(v)),
            Op::Ror => self.modify(operand, bus, shift::ror),
            Op::Asr => self.modify(operand, bus, |v, _| shift::asr(v)),
            Op::Asl => self.modify(operand, bus, |v, _| shift::asl(v)),
            Op::Rol => self.modify(operand, bus, shift::rol),
            Op::Dec => self.modify(operand, bus, |v, _| unary::dec(v)),
            Op::Inc => self.modify(operand, bus, |v, _| unary::inc(v)),
            Op::Clr => self.modify(operand, bus, |_, _| unary::clr()),
            Op::Tst => {
                let value = self.read_operand8(operand, bus);
                self.cc.apply(unary::tst(value));
            }

            Op::Sub(reg) => self.accumulate(reg, operand, bus, |a, m, _| binary::sub(a, m)),
            Op::Sbc(reg) => self.accumulate(reg, operand, bus, binary::sbc),
            Op::Add(reg) => self.accumulate(reg, operand, bus, |a, m, _| binary::add(a, m)),
            Op::Adc(reg) => self.accumulate(reg, operand, bus, binary::adc),
            Op::And(reg) => self.accumulate(reg, operand, bus, |a, m, _| binary::and(a, m)),
            Op::Or(reg) => self.accumulate(reg, operand, bus, |a, m, _| binary::or(a, m)),
            Op::Eor(reg) => self.accumulate(reg, operand, bus, |a, m, _| binary::eor(a, m)),
            Op::Cmp(reg) => {
                let m = self.read_operand8(operand, bus);
                self.cc.apply(binary::cmp(self.reg(reg) as u8, m));
            }
            Op::Bit(reg) => {
                let m = self.read_operand8(operand, bus);
                self.cc.apply(binary::bit(self.reg(reg) as u8, m));
            }
            Op::Ld(reg) => self.load8(reg, Self::address(operand), bus),
            Op::St(reg) => self.store8(reg, Self::address(operand), bus),

            Op::Addd => {
                let m = bus.read16(Self::address(operand));
                let result = word::add16(self.d(), m);
                self.set_d(result.value);
                self.cc.apply(result.flags);
            }
            Op::Subd => {
                let m = bus.read16(Self::address(operand));
                let result = word::sub16(self.d(), m);
                self.set_d(result.value);
                self.cc.apply(result.flags);
            }
            Op::Cmp16(reg) => {
                let m = bus.read16(Self::address(operand));
                self.cc.apply(word::cmp16(self.reg(reg), m));
            }
            Op::Ld16(reg) => self.load16(reg, Self::address(operand), bus),
            Op::St16(reg) => self.store16(reg, Self::address(operand), bus),
            Op::Lea(reg) => self.load_effective_address(reg, Self::address(operand)),

            Op::Jmp => self.pc = Self::address(operand),
            Op::Branch(condition) => self.branch(condition, Self::address(operand)),

            Op::Nop => {}
            Op::Sex => {
                let result = word::sex(self.b);
                self.set_d(result.value);
                self.cc.apply(result.flags);
            }
            Op::Abx => self.x = self.x.wrapping_add(self.b as u16),
            Op::Mul => {
                let result = word::mul(self.a, self.b);
                self.set_d(result.value);
                self.cc.apply(result.flags);
            }
            Op::Orcc => {
                let m = self.read_operand8(operand, bus);
                self.cc = ConditionCodes::from_byte(self.cc.to_byte() | m);
            }
            Op::Andcc => {
                let m = self.read_operand8(operand, bus);
                self.cc = ConditionCodes::from_byte(self.cc.to_byte() & m);
            }
            Op::Exg => {
                let postbyte = self.read_operand8(operand, bus);
                self.exchange(postbyte);
            }
            Op::Tfr => {
                let postbyte = self.read_operand8(operand, bus);
                self.transfer(postbyte);
            }
        }
    }

    /// Effective address of a memory operand.
    ///
    /// The opcode table only pairs memory operations with modes that resolve
    /// to an address, so a register operand here is a table bug.
    fn address(operand: Operand) -> u16 {
        match operand {
            Operand::Address(addr) => addr,
            other => unreachable!("memory operation resolved to {other:?}"),
        }
    }

    fn read_operand8<B: Bus + ?Sized>(&self, operand: Operand, bus: &mut B) -> u8 {
        match operand {
            Operand::Register(reg) => self.reg(reg) as u8,
            Operand::Address(addr) => bus.read8(addr),
            Operand::None => unreachable!("byte operation without an operand"),
        }
    }

    fn write_operand8<B: Bus + ?Sized>(&mut self, operand: Operand, bus: &mut B, value: u8) {
        match operand {
            Operand::Register(reg) => self.set_reg(reg, value as u16),
            Operand::Address(addr) => bus.write8(addr, value),
            Operand::None => unreachable!("byte operation without an operand"),
        }
    }

    /// Read-modify-write on a register or memory byte. The operation gets the
    /// operand and the current carry.
    #[inline]
    fn modify<B, F>(&mut self, operand: Operand, bus: &mut B, operation: F)
    where
        B: Bus + ?Sized,
        F: FnOnce(u8, bool) -> AluResult<u8>,
    {
        let value = self.read_operand8(operand, bus);
        let result = operation(value, self.cc.c);
        self.write_operand8(operand, bus, result.value);
        self.cc.apply(result.flags);
    }

    /// Accumulator op memory, result written back to the accumulator.
    #[inline]
    fn accumulate<B, F>(&mut self, acc: Register, operand: Operand, bus: &mut B, operation: F)
    where
        B: Bus + ?Sized,
        F: FnOnce(u8, u8, bool) -> AluResult<u8>,
    {
        let m = self.read_operand8(operand, bus);
        let result = operation(self.reg(acc) as u8, m, self.cc.c);
        self.set_reg(acc, result.value as u16);
        self.cc.apply(result.flags);
    }
}
