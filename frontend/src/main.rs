use std::process::ExitCode;

use clap::Parser;
use dragon_core::cpu::M6809;

mod cli;
mod config;
mod error;
mod runner;

use cli::Cli;
use config::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = Settings::merge(cli, config);

    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .init();

    let mut cpu = M6809::new();
    match runner::run(&mut cpu, &settings) {
        Ok(outcome) => {
            println!("{}: {} instructions", outcome.reason, outcome.executed);
            println!("{}", runner::register_dump(&cpu));
            ExitCode::SUCCESS
        }
        Err(e @ error::FrontendError::Cpu(_)) => {
            eprintln!("Error: {e}");
            println!("{}", runner::register_dump(&cpu));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
