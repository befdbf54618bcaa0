#![allow(dead_code)]

use dragon_core::core::Bus;
use dragon_core::cpu::M6809;

/// Minimal bus for testing: flat 64KB read/write memory that counts writes.
pub struct TestBus {
    pub memory: [u8; 0x10000],
    pub writes: usize,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            writes: 0,
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, data: u8) {
        self.writes += 1;
        self.memory[addr as usize] = data;
    }
}

/// Load `program` at 0 and execute `count` instructions.
pub fn run_steps(cpu: &mut M6809, bus: &mut TestBus, program: &[u8], count: usize) {
    bus.load(0, program);
    cpu.pc = 0;
    for _ in 0..count {
        cpu.step(bus).expect("valid instruction");
    }
}
