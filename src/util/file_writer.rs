use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::error::{RResult, RuntimeError};

pub fn write_file_safe(file_path: &Path, content: &str) -> RResult<()> {
    let write = || -> std::io::Result<()> {
        let mut f = File::create(file_path)?;
        write!(f, "{}", content)?;
        f.flush()
    };

    write().map_err(|err| {
        RuntimeError::error(&format!("Unable to write {}: {}", file_path.to_string_lossy(), err)).to_array()
    })
}
