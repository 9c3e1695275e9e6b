use std::process::ExitCode;
use clap::{arg, Command};

use crate::cli::logging::{dump_failure, init_logger};
use crate::error::RuntimeError;

pub mod check;
pub mod transpile;
pub mod logging;

pub fn make_command() -> Command {
    Command::new("gojava")
        .about("Translates a subset of Go into Java source.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose ... "Log more; repeat to trace every node").global(true))
        .subcommand(check::make_command())
        .subcommand(transpile::make_command())
}

pub fn run_command() -> ExitCode {
    let matches = make_command().get_matches();
    init_logger(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("check", sub_matches)) => check::run(sub_matches),
        Some(("transpile", sub_matches)) => transpile::run(sub_matches),
        _ => Err(RuntimeError::error("Unsupported action.").to_array()),
    };

    result.unwrap_or_else(dump_failure)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::cli::make_command;

    #[test]
    fn transpile_accepts_paths_and_output() {
        let matches = make_command()
            .try_get_matches_from(["gojava", "-vv", "transpile", "a.go", "b.go", "-o", "Out.java"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);

        let Some(("transpile", sub_matches)) = matches.subcommand() else {
            panic!();
        };
        let paths = sub_matches.get_many::<PathBuf>("PATH").unwrap().collect::<Vec<_>>();
        assert_eq!(paths, vec![&PathBuf::from("a.go"), &PathBuf::from("b.go")]);
        assert_eq!(sub_matches.get_one::<PathBuf>("output"), Some(&PathBuf::from("Out.java")));
    }

    #[test]
    fn check_requires_a_path() {
        assert!(make_command().try_get_matches_from(["gojava", "check"]).is_err());
    }
}
