use std::path::PathBuf;

use crate::ast::Decl;

/// One compilation unit.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct File {
    pub name: String,
    pub decls: Vec<Decl>,
}

/// Files sharing a package name, in the order they were given.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Package {
    pub name: String,
    pub files: Vec<(PathBuf, File)>,
}
