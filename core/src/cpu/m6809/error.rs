use thiserror::Error;

/// Fatal decode failures. Execution cannot continue past either one: the
/// program counter has left valid code or the table is missing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// `opcode` includes the page prefix, e.g. 0x1001 for an undefined page-2 byte.
    #[error("invalid opcode 0x{opcode:02X} at PC 0x{pc:04X}")]
    InvalidOpcode { opcode: u16, pc: u16 },

    #[error("invalid indexed postbyte 0x{postbyte:02X} at PC 0x{pc:04X}")]
    InvalidPostbyte { postbyte: u8, pc: u16 },
}

impl CpuError {
    /// Start address of the instruction that failed to decode.
    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::InvalidOpcode { pc, .. } | CpuError::InvalidPostbyte { pc, .. } => pc,
        }
    }
}
