use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Load a raw 6809 program image into a flat 64K RAM and run it.
#[derive(Debug, Parser)]
#[command(name = "dragon", version)]
pub struct Cli {
    /// Raw binary image
    pub image: PathBuf,

    /// Address the image is loaded at [default: config, else 0x0000]
    #[arg(long, value_parser = parse_address)]
    pub load: Option<u16>,

    /// Initial PC [default: load address]
    #[arg(long, value_parser = parse_address)]
    pub start: Option<u16>,

    /// Stop when PC reaches this address
    #[arg(long, value_parser = parse_address)]
    pub end: Option<u16>,

    /// Stop after this many instructions
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Config file [default: <config dir>/dragon6809/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// -v for debug logging, -vv for a per-instruction trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse `0x1234`, `$1234` or decimal `4660`.
pub fn parse_address(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = s.strip_prefix('$') {
        u16::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
