pub mod core;
pub mod cpu;

pub mod prelude {
    pub use crate::core::{Bus, Ram};
    pub use crate::cpu::m6809::{CcFlag, ConditionCodes, CpuError, Register};
    pub use crate::cpu::{CpuStateTrait, M6809, M6809State};
}
