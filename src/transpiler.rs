use std::ops::Range;
use custom_error::custom_error;
use log::debug;

use crate::ast;
use crate::error::{ErrInFile, RResult, RuntimeError, TryCollectMany};
use crate::util::position::{positioned, Positioned};

pub mod java;
pub mod namespaces;
mod tests;

custom_error!{pub TranslationError
    Unsupported{construct: Positioned<String>} = "Unsupported construct: {construct}",
    Malformed{msg: String} = "Malformed syntax tree: {msg}",
}

impl TranslationError {
    pub fn unsupported(construct: &str, position: Range<usize>) -> TranslationError {
        TranslationError::Unsupported { construct: positioned(construct.to_string(), position) }
    }

    pub fn to_runtime_error(&self) -> RuntimeError {
        let error = RuntimeError::error(&self.to_string());
        match self {
            TranslationError::Unsupported { construct } => error.in_range(construct.position.clone()),
            TranslationError::Malformed { .. } => error,
        }
    }
}

/// Translates one compilation unit into Java source.
/// Each call starts from fresh emission state; nothing is returned if any part fails.
pub fn transpile(file: &ast::File) -> RResult<String> {
    let mut context = java::EmissionContext::new();
    let mut out = String::new();

    java::transpile_file(file, &mut context, &mut out)
        .map_err(|e| e.to_runtime_error().to_array())?;

    debug!("Transpiled package {} into {} bytes", file.name, out.len());
    Ok(out)
}

/// Translates every file of a package in order, separated by a blank line.
pub fn transpile_package(package: &ast::Package) -> RResult<String> {
    let units: Vec<String> = package.files.iter()
        .map(|(path, file)| transpile(file).err_in_file(path))
        .try_collect_many()?;

    Ok(units.join("\n\n"))
}
