use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{arg, ArgMatches, Command};
use itertools::Itertools;

use crate::cli::logging::{dump_start, dump_success};
use crate::error::{ErrInFile, RResult, RuntimeError, TryCollectMany};
use crate::util::file_writer::write_file_safe;
use crate::{parser, transpiler};

pub fn make_command() -> Command {
    Command::new("transpile")
        .about("Translate Go files into Java. Several files are translated as one package.")
        .arg_required_else_help(true)
        .arg(arg!(<PATH> ... "Go files to translate").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(-o --output <FILE> "write the Java source here instead of stdout").required(false).value_parser(clap::value_parser!(PathBuf)))
}

pub fn run(args: &ArgMatches) -> RResult<ExitCode> {
    let paths = args
        .get_many::<PathBuf>("PATH")
        .into_iter()
        .flatten()
        .collect_vec();

    let start = dump_start(format!("transpile for {} file(s)", paths.len()).as_str());

    let sources: Vec<(PathBuf, String)> = paths.iter()
        .map(|path| read_source(path))
        .try_collect_many()?;

    let java = match sources.as_slice() {
        [(path, content)] => {
            let file = parser::parse_file(content).err_in_file(path)?;
            transpiler::transpile(&file).err_in_file(path)?
        }
        _ => transpiler::transpile_package(&parser::parse_package(&sources)?)?,
    };

    match args.get_one::<PathBuf>("output") {
        Some(output_path) => {
            write_file_safe(output_path, &java)?;
            eprintln!("{}", output_path.display());
        }
        None => println!("{}", java),
    }

    Ok(dump_success(start))
}

pub fn read_source(path: &PathBuf) -> RResult<(PathBuf, String)> {
    fs::read_to_string(path)
        .map(|content| (path.clone(), content))
        .map_err(|e| RuntimeError::error(&format!("Could not read {}: {}", path.display(), e)).to_array())
}
