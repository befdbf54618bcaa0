// Re-export state types
pub mod state;
pub use state::{CpuStateTrait, M6809State};

pub mod m6809;
pub use m6809::M6809;
