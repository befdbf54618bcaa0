use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use dragon_core::core::Bus;
use dragon_core::cpu::m6809::ConditionCodes;
use dragon_core::cpu::M6809;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

// --- TracingBus: flat 64KB memory that records every access ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusOp {
    Read,
    Write,
}

impl BusOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BusOp::Read => "read",
            BusOp::Write => "write",
        }
    }
}

#[derive(Clone, Debug)]
pub struct BusCycle {
    pub addr: u16,
    pub data: u8,
    pub op: BusOp,
}

pub struct TracingBus {
    pub memory: [u8; 0x10000],
    pub cycles: Vec<BusCycle>,
}

impl TracingBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            cycles: Vec::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn clear_cycles(&mut self) {
        self.cycles.clear();
    }
}

impl Default for TracingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for TracingBus {
    fn read8(&mut self, addr: u16) -> u8 {
        let data = self.memory[addr as usize];
        self.cycles.push(BusCycle {
            addr,
            data,
            op: BusOp::Read,
        });
        data
    }

    fn write8(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
        self.cycles.push(BusCycle {
            addr,
            data,
            op: BusOp::Write,
        });
    }
}

// --- JSON test vector types ---

/// One single-step vector: registers and touched RAM before and after a
/// single instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
    /// Base plus addressing-mode cycles reported by `step`.
    pub total_cycles: u32,
    /// Bus accesses in order. Optional in hand-written vectors.
    #[serde(default)]
    pub cycles: Vec<(u16, u8, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub s: u16,
    pub u: u16,
    pub a: u8,
    pub b: u8,
    pub dp: u8,
    pub x: u16,
    pub y: u16,
    pub cc: u8,
    #[serde(default)]
    pub ram: Vec<(u16, u8)>,
}

impl CpuState {
    /// Registers of `cpu`; `ram` is left for the caller to fill.
    pub fn capture(cpu: &M6809) -> Self {
        Self {
            pc: cpu.pc,
            s: cpu.s,
            u: cpu.u,
            a: cpu.a,
            b: cpu.b,
            dp: cpu.dp,
            x: cpu.x,
            y: cpu.y,
            cc: cpu.cc.to_byte(),
            ram: Vec::new(),
        }
    }

    /// Seed `cpu` and `memory` from this state.
    pub fn apply(&self, cpu: &mut M6809, memory: &mut [u8; 0x10000]) {
        cpu.pc = self.pc;
        cpu.s = self.s;
        cpu.u = self.u;
        cpu.a = self.a;
        cpu.b = self.b;
        cpu.dp = self.dp;
        cpu.x = self.x;
        cpu.y = self.y;
        cpu.cc = ConditionCodes::from_byte(self.cc);
        for &(addr, val) in &self.ram {
            memory[addr as usize] = val;
        }
    }
}

/// Read a vector file. Files ending in `.gz` are decompressed first.
pub fn load_vectors(path: &Path) -> io::Result<Vec<TestCase>> {
    let file = BufReader::new(File::open(path)?);
    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    Ok(serde_json::from_str(&json)?)
}

/// True for `.json` and `.json.gz` vector files.
pub fn is_vector_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.ends_with(".json") || name.ends_with(".json.gz")
}
