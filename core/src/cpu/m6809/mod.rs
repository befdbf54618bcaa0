mod addressing;
pub mod alu;
mod branch;
mod error;
mod execute;
mod load_store;
pub mod opcodes;
mod registers;
mod transfer;

use log::{debug, error, trace};

use crate::core::Bus;
use crate::cpu::state::{CpuStateTrait, M6809State};

pub use addressing::{Mode, Operand};
pub use branch::Condition;
pub use error::CpuError;
pub use registers::{CcFlag, ConditionCodes, Register};

/// Address of the big-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFE;

pub struct M6809 {
    // Registers (a,b,dp,x,y,u,s,pc,cc)
    pub a: u8,
    pub b: u8,
    pub dp: u8,
    pub x: u16,
    pub y: u16,
    pub u: u16,
    pub s: u16,
    pub pc: u16,
    pub cc: ConditionCodes,

    cycles: u64,
    instructions: u64,
    halted: bool,
}

impl M6809 {
    pub fn new() -> Self {
        Self {
            a: 0,
            b: 0,
            dp: 0,
            x: 0,
            y: 0,
            u: 0,
            s: 0,
            pc: 0,
            cc: ConditionCodes::default(),
            cycles: 0,
            instructions: 0,
            halted: false,
        }
    }

    pub fn d(&self) -> u16 {
        u16::from_be_bytes([self.a, self.b])
    }

    pub fn set_d(&mut self, val: u16) {
        let bytes = val.to_be_bytes();
        self.a = bytes[0];
        self.b = bytes[1];
    }

    /// Read any register, widened to 16 bits.
    pub fn reg(&self, reg: Register) -> u16 {
        match reg {
            Register::D => self.d(),
            Register::X => self.x,
            Register::Y => self.y,
            Register::U => self.u,
            Register::S => self.s,
            Register::Pc => self.pc,
            Register::A => self.a as u16,
            Register::B => self.b as u16,
            Register::Cc => self.cc.to_byte() as u16,
            Register::Dp => self.dp as u16,
        }
    }

    /// Write any register. 8-bit registers keep only the low byte.
    pub fn set_reg(&mut self, reg: Register, val: u16) {
        let low = val as u8;
        match reg {
            Register::D => self.set_d(val),
            Register::X => self.x = val,
            Register::Y => self.y = val,
            Register::U => self.u = val,
            Register::S => self.s = val,
            Register::Pc => self.pc = val,
            Register::A => self.a = low,
            Register::B => self.b = low,
            Register::Cc => self.cc = ConditionCodes::from_byte(low),
            Register::Dp => self.dp = low,
        }
    }

    pub(crate) fn fetch8<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u8 {
        let byte = bus.read8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    pub(crate) fn fetch16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let word = bus.read16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        word
    }

    /// Power-on state: registers zeroed, IRQ and FIRQ masked.
    pub fn reset(&mut self) {
        *self = Self::new();
        self.cc.i = true;
        self.cc.f = true;
    }

    /// `reset`, then load PC from the reset vector.
    pub fn reset_from_vector<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.reset();
        self.pc = bus.read16(RESET_VECTOR);
        debug!("reset: PC=0x{:04X} from vector", self.pc);
    }

    /// Stop `run`/`run_until` at the next instruction boundary.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn resume(&mut self) {
        self.halted = false;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Total cycles executed since creation or reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Total instructions executed since creation or reset.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Execute one instruction and return its cycle cost.
    ///
    /// Decode failures are fatal: PC is left on the faulting instruction and
    /// the CPU halts.
    pub fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        let start = self.pc;
        let decoded = self.decode(bus, start).and_then(|instruction| {
            self.resolve(instruction, bus, start)
                .map(|resolved| (instruction, resolved))
        });
        let (instruction, resolved) = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                self.pc = start;
                self.halted = true;
                error!("{err}");
                return Err(err);
            }
        };

        self.execute(instruction, resolved.operand, bus);

        let cycles = instruction.cycles as u32 + resolved.extra_cycles;
        self.cycles += cycles as u64;
        self.instructions += 1;
        trace!(
            "{start:04X}  {:<5} A={:02X} B={:02X} X={:04X} Y={:04X} U={:04X} S={:04X} DP={:02X} CC={}",
            instruction.mnemonic,
            self.a,
            self.b,
            self.x,
            self.y,
            self.u,
            self.s,
            self.dp,
            self.cc,
        );
        Ok(cycles)
    }

    /// Step until `stop` returns true or the CPU is halted. `stop` is checked
    /// before every fetch. Returns the number of instructions executed.
    pub fn run_until<B, F>(&mut self, bus: &mut B, mut stop: F) -> Result<u64, CpuError>
    where
        B: Bus + ?Sized,
        F: FnMut(&Self) -> bool,
    {
        let mut executed = 0;
        while !self.halted && !stop(self) {
            self.step(bus)?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Load `image` at `start`, point PC at it and execute until PC equals
    /// `end`. With no `end`, execute exactly one instruction.
    pub fn run<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        start: u16,
        end: Option<u16>,
        image: &[u8],
    ) -> Result<u64, CpuError> {
        let mut addr = start;
        for &byte in image {
            bus.write8(addr, byte);
            addr = addr.wrapping_add(1);
        }
        self.pc = start;
        self.halted = false;

        debug!(
            "run: {} bytes at 0x{start:04X}, end {}",
            image.len(),
            end.map_or_else(|| "single step".to_string(), |e| format!("0x{e:04X}"))
        );
        let executed = match end {
            Some(end) => self.run_until(bus, |cpu| cpu.pc == end)?,
            None => {
                self.step(bus)?;
                1
            }
        };
        debug!(
            "run: stopped at PC 0x{:04X} after {executed} instructions ({} cycles total)",
            self.pc, self.cycles
        );
        Ok(executed)
    }
}

impl Default for M6809 {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStateTrait for M6809 {
    type Snapshot = M6809State;

    fn snapshot(&self) -> M6809State {
        M6809State {
            a: self.a,
            b: self.b,
            dp: self.dp,
            x: self.x,
            y: self.y,
            u: self.u,
            s: self.s,
            pc: self.pc,
            cc: self.cc.to_byte(),
        }
    }
}
