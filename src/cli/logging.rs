use std::time::Instant;
use std::process::ExitCode;
use colored::Colorize;
use log::LevelFilter;

use crate::error::{print_errors, RuntimeError};

/// Warnings by default, `debug` with one `-v`, `trace` with more. `RUST_LOG` overrides this.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

// Status goes to stderr; stdout only ever carries Java source.

pub fn dump_start(name: &str) -> Instant {
    eprintln!("{} {}", "Running".green().bold(), name);
    Instant::now()
}

pub fn dump_named_failure(name: &str, err: Vec<RuntimeError>) -> ExitCode {
    print_errors(&err);
    eprintln!("{} on {}: {} error(s)", "Failure".red().bold(), name, err.len());
    ExitCode::FAILURE
}

pub fn dump_failure(err: Vec<RuntimeError>) -> ExitCode {
    print_errors(&err);
    eprintln!("{}: {} error(s)", "Failure".red().bold(), err.len());
    ExitCode::FAILURE
}

pub fn dump_success(start: Instant) -> ExitCode {
    eprintln!("{} in {:.2}s", "Finished".green().bold(), start.elapsed().as_secs_f32());
    ExitCode::SUCCESS
}
