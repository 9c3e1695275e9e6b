use std::path::PathBuf;
use std::process::ExitCode;
use clap::{arg, ArgMatches, Command};
use log::info;

use crate::cli::logging::{dump_named_failure, dump_start, dump_success};
use crate::cli::transpile::read_source;
use crate::error::{ErrInFile, RResult};
use crate::{parser, transpiler};

pub fn make_command() -> Command {
    Command::new("check")
        .about("Parse and translate files without writing anything.")
        .arg_required_else_help(true)
        .arg(arg!(<PATH> ... "files to check").value_parser(clap::value_parser!(PathBuf)))
}

pub fn run(args: &ArgMatches) -> RResult<ExitCode> {
    let paths = args
        .get_many::<PathBuf>("PATH")
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    let start = dump_start(format!("check for {} file(s)", paths.len()).as_str());

    let mut error_count = 0;
    for path in paths {
        match check_file(path) {
            Ok(length) => info!("{}: {} bytes of Java", path.display(), length),
            Err(e) => {
                dump_named_failure(&path.to_string_lossy(), e);
                error_count += 1;
            }
        }
    }

    match error_count {
        0 => Ok(dump_success(start)),
        _ => Ok(ExitCode::FAILURE),
    }
}

fn check_file(path: &PathBuf) -> RResult<usize> {
    let (_, content) = read_source(path)?;
    let file = parser::parse_file(&content).err_in_file(path)?;
    let java = transpiler::transpile(&file).err_in_file(path)?;
    Ok(java.len())
}
