use strum::IntoStaticStr;

use crate::ast::{AssignOp, BranchKind, Expr, GenDecl, IncDecOp};

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Block {
        Block { statements }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, IntoStaticStr)]
pub enum Stmt {
    /// Declarations inside function bodies are always `const`, `type` or `var` groups.
    Decl(GenDecl),
    Empty,
    Labeled { label: String, stmt: Box<Stmt> },
    Expr(Expr),
    Send { chan: Expr, value: Expr },
    IncDec { x: Expr, op: IncDecOp },
    Assign { lhs: Vec<Expr>, op: AssignOp, rhs: Vec<Expr> },
    Go(Expr),
    Defer(Expr),
    Return(Vec<Expr>),
    Branch { kind: BranchKind, label: Option<String> },
    Block(Block),
    If(Box<IfStmt>),
    Switch(Box<SwitchStmt>),
    TypeSwitch(Box<TypeSwitchStmt>),
    Select(Vec<CommClause>),
    For(Box<ForStmt>),
    Range(Box<RangeStmt>),
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct IfStmt {
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: Block,
    /// Either `Stmt::Block` or another `Stmt::If`.
    pub else_: Option<Stmt>,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct SwitchStmt {
    pub init: Option<Stmt>,
    pub tag: Option<Expr>,
    pub body: Vec<CaseClause>,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TypeSwitchStmt {
    pub init: Option<Stmt>,
    /// `x.(type)` as an expression statement, or `v := x.(type)` as an assignment.
    pub assign: Stmt,
    pub body: Vec<CaseClause>,
}

/// A `case` of a switch or type switch. `list` is `None` for `default`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CaseClause {
    pub list: Option<Vec<Expr>>,
    pub body: Vec<Stmt>,
}

/// A `case` of a select. `comm` is `None` for `default`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CommClause {
    pub comm: Option<Stmt>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ForStmt {
    pub init: Option<Stmt>,
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: Block,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct RangeStmt {
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub x: Expr,
    pub body: Block,
}
