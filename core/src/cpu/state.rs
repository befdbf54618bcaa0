//! CPU state snapshot types and traits

/// Trait for CPU types that can provide state snapshots
pub trait CpuStateTrait {
    type Snapshot;
    fn snapshot(&self) -> Self::Snapshot;
}

/// M6809 CPU state snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct M6809State {
    pub a: u8,   // Accumulator A
    pub b: u8,   // Accumulator B
    pub dp: u8,  // Direct Page register
    pub x: u16,  // Index register X
    pub y: u16,  // Index register Y
    pub u: u16,  // User stack pointer
    pub s: u16,  // Hardware stack pointer
    pub pc: u16, // Program counter
    pub cc: u8,  // Condition codes, packed
}

impl M6809State {
    /// Combined D accumulator (A high, B low).
    pub fn d(&self) -> u16 {
        u16::from_be_bytes([self.a, self.b])
    }
}
