pub use declaration::{Decl, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec};
pub use expression::Expr;
pub use fields::{Field, FieldList, FuncType};
pub use file::{File, Package};
pub use operators::{AssignOp, BinaryOp, BranchKind, ChanDir, DeclToken, IncDecOp, LitKind, UnaryOp};
pub use statement::{Block, CaseClause, CommClause, ForStmt, IfStmt, RangeStmt, Stmt, SwitchStmt, TypeSwitchStmt};

mod declaration;
mod expression;
mod fields;
mod file;
mod operators;
mod statement;
