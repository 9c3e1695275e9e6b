use strum::IntoStaticStr;

use crate::ast::{Block, DeclToken, Expr, FieldList, FuncType};
use crate::util::position::Positioned;

#[derive(Debug, Eq, PartialEq, Clone, IntoStaticStr)]
pub enum Decl {
    Gen(GenDecl),
    Func(Box<FuncDecl>),
}

/// `import`, `const`, `type` or `var`, with one or more specs (a parenthesized group).
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct GenDecl {
    pub token: DeclToken,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Eq, PartialEq, Clone, IntoStaticStr)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ImportSpec {
    pub name: Option<String>,
    pub path: String,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub type_: Option<Expr>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TypeSpec {
    pub name: String,
    pub type_params: Option<Positioned<FieldList>>,
    /// `type A = B`
    pub is_alias: bool,
    pub type_: Expr,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct FuncDecl {
    pub recv: Option<FieldList>,
    pub name: String,
    pub type_: FuncType,
    /// `None` for declarations without a body (implemented elsewhere).
    pub body: Option<Block>,
}

impl FuncDecl {
    pub fn receiver_type_name(&self) -> Option<&str> {
        self.recv.as_ref()?.first_type()?.base_type_name()
    }

    pub fn receiver_name(&self) -> Option<&str> {
        self.recv.as_ref()?.list.first()?.names.first().map(String::as_str)
    }
}
