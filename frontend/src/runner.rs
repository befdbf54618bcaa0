use std::fmt;
use std::fs;

use dragon_core::core::Ram;
use dragon_core::cpu::M6809;
use log::info;

use crate::config::Settings;
use crate::error::FrontendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndAddress,
    StepLimit,
    /// Halted with no end address or step limit in force.
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub executed: u64,
    pub reason: StopReason,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndAddress => write!(f, "reached end address"),
            StopReason::StepLimit => write!(f, "step limit reached"),
            StopReason::Halted => write!(f, "halted"),
        }
    }
}

/// Load the image into fresh RAM and run `cpu` under `settings`.
///
/// `cpu` is left in its final state so the caller can dump registers even
/// when execution fails.
pub fn run(cpu: &mut M6809, settings: &Settings) -> Result<Outcome, FrontendError> {
    let image = fs::read(&settings.image)?;
    if image.is_empty() {
        return Err(FrontendError::EmptyImage(settings.image.clone()));
    }
    let mut ram = Ram::new();
    ram.load(settings.load, &image);
    info!(
        "loaded {} bytes from {} at 0x{:04X}",
        image.len(),
        settings.image.display(),
        settings.load
    );
    run_loaded(cpu, &mut ram, settings)
}

pub fn run_loaded(
    cpu: &mut M6809,
    ram: &mut Ram,
    settings: &Settings,
) -> Result<Outcome, FrontendError> {
    cpu.reset();
    settings.registers.apply(cpu);
    cpu.pc = settings.start;

    let end = settings.end;
    let limit = settings.max_steps;
    let executed = cpu.run_until(ram, |cpu| {
        end == Some(cpu.pc) || limit.is_some_and(|max| cpu.instructions() >= max)
    })?;

    let reason = if end == Some(cpu.pc) {
        StopReason::EndAddress
    } else if limit.is_some_and(|max| executed >= max) {
        StopReason::StepLimit
    } else {
        StopReason::Halted
    };
    info!("{reason} after {executed} instructions, {} cycles", cpu.cycles());
    Ok(Outcome { executed, reason })
}

/// One-line register dump.
pub fn register_dump(cpu: &M6809) -> String {
    format!(
        "PC={:04X} A={:02X} B={:02X} D={:04X} X={:04X} Y={:04X} U={:04X} S={:04X} DP={:02X} CC={:02X} [{}] cycles={}",
        cpu.pc,
        cpu.a,
        cpu.b,
        cpu.d(),
        cpu.x,
        cpu.y,
        cpu.u,
        cpu.s,
        cpu.dp,
        cpu.cc.to_byte(),
        cpu.cc,
        cpu.cycles()
    )
}
