use std::process::ExitCode;

mod ast;
mod cli;
mod error;
mod parser;
mod transpiler;
mod util;

fn main() -> ExitCode {
    cli::run_command()
}
