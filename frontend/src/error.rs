use std::path::PathBuf;

use dragon_core::cpu::m6809::CpuError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config file {0} not found")]
    MissingConfig(PathBuf),

    #[error("program image {0} is empty")]
    EmptyImage(PathBuf),

    #[error(transparent)]
    Cpu(#[from] CpuError),
}
