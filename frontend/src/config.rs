//! Optional TOML configuration, merged under the command line.
//!
//! ```toml
//! load_address = 0x4000
//! max_steps = 100000
//! log_level = "info"
//!
//! [registers]
//! s = 0x7F00
//! dp = 0x20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dragon_core::cpu::M6809;
use dragon_core::cpu::m6809::ConditionCodes;
use log::debug;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::FrontendError;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub load_address: Option<u16>,
    pub max_steps: Option<u64>,
    pub log_level: Option<String>,
    pub registers: RegisterConfig,
}

/// Initial register values. Unset registers keep their reset value.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterConfig {
    pub a: Option<u8>,
    pub b: Option<u8>,
    pub dp: Option<u8>,
    pub x: Option<u16>,
    pub y: Option<u16>,
    pub u: Option<u16>,
    pub s: Option<u16>,
    pub cc: Option<u8>,
}

impl RegisterConfig {
    pub fn apply(&self, cpu: &mut M6809) {
        if let Some(a) = self.a {
            cpu.a = a;
        }
        if let Some(b) = self.b {
            cpu.b = b;
        }
        if let Some(dp) = self.dp {
            cpu.dp = dp;
        }
        if let Some(x) = self.x {
            cpu.x = x;
        }
        if let Some(y) = self.y {
            cpu.y = y;
        }
        if let Some(u) = self.u {
            cpu.u = u;
        }
        if let Some(s) = self.s {
            cpu.s = s;
        }
        if let Some(cc) = self.cc {
            cpu.cc = ConditionCodes::from_byte(cc);
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dragon6809").join("config.toml"))
}

pub fn parse(text: &str) -> Result<Config, FrontendError> {
    Ok(toml::from_str(text)?)
}

/// Read `explicit` if given (it must exist), otherwise the default path if
/// present, otherwise an empty config.
pub fn load(explicit: Option<&Path>) -> Result<Config, FrontendError> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(FrontendError::MissingConfig(path.to_path_buf()));
        }
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    debug!("loading config from {}", path.display());
    parse(&fs::read_to_string(&path)?)
}

/// Effective settings after layering the command line over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub image: PathBuf,
    pub load: u16,
    pub start: u16,
    pub end: Option<u16>,
    pub max_steps: Option<u64>,
    pub log_level: String,
    pub registers: RegisterConfig,
}

impl Settings {
    pub fn merge(cli: Cli, config: Config) -> Self {
        let load = cli.load.or(config.load_address).unwrap_or(0);
        let log_level = match cli.verbose {
            0 => config
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        Self {
            image: cli.image,
            load,
            start: cli.start.unwrap_or(load),
            end: cli.end,
            max_steps: cli.max_steps.or(config.max_steps),
            log_level,
            registers: config.registers,
        }
    }
}
