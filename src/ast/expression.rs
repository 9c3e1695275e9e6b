use std::fmt::{Display, Error, Formatter};
use std::ops::Range;
use strum::IntoStaticStr;

use crate::ast::{BinaryOp, Block, ChanDir, FieldList, FuncType, LitKind, UnaryOp};
use crate::util::fmt::write_comma_separated_list;

/// Go expressions, type expressions included: as in Go itself, `[]int` and
/// `map[string]T` are expressions wherever a type is expected.
#[derive(Debug, Eq, PartialEq, Clone, IntoStaticStr)]
pub enum Expr {
    Ident(String),
    BasicLit { kind: LitKind, value: String },
    /// `type_` is elided for nested literals, e.g. the inner braces of `[][]int{{1}}`.
    CompositeLit { type_: Option<Box<Expr>>, elements: Vec<Expr> },
    FuncLit { type_: Box<FuncType>, body: Block },
    Paren(Box<Expr>),
    Selector { x: Box<Expr>, sel: String },
    Index { x: Box<Expr>, index: Box<Expr> },
    /// Generic instantiation, `F[int, string]`.
    IndexList { x: Box<Expr>, indices: Vec<Expr>, position: Range<usize> },
    Slice { x: Box<Expr>, low: Option<Box<Expr>>, high: Option<Box<Expr>>, max: Option<Box<Expr>> },
    /// `type_` is `None` for the `x.(type)` guard of a type switch.
    TypeAssert { x: Box<Expr>, type_: Option<Box<Expr>> },
    Call { fun: Box<Expr>, args: Vec<Expr>, ellipsis: bool },
    /// Pointer type or dereference.
    Star(Box<Expr>),
    Unary { op: UnaryOp, x: Box<Expr> },
    Binary { x: Box<Expr>, op: BinaryOp, y: Box<Expr> },
    KeyValue { key: Box<Expr>, value: Box<Expr> },
    /// `...T` in a variadic parameter.
    Ellipsis(Option<Box<Expr>>),

    ArrayType { len: Option<Box<Expr>>, elt: Box<Expr> },
    StructType(FieldList),
    FuncType(Box<FuncType>),
    InterfaceType(FieldList),
    MapType { key: Box<Expr>, value: Box<Expr> },
    ChanType { dir: ChanDir, value: Box<Expr> },
}

impl Expr {
    pub fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    /// The name of the type a method receiver belongs to: `T` for both `T` and `*T`.
    pub fn base_type_name(&self) -> Option<&str> {
        match self {
            Expr::Ident(name) => Some(name.as_str()),
            Expr::Star(x) | Expr::Paren(x) => x.base_type_name(),
            Expr::Index { x, .. } | Expr::IndexList { x, .. } => x.base_type_name(),
            _ => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
        match self {
            Expr::Ident(name) => write!(fmt, "{}", name),
            Expr::BasicLit { value, .. } => write!(fmt, "{}", value),
            Expr::CompositeLit { type_, elements } => {
                if let Some(type_) = type_ {
                    write!(fmt, "{}", type_)?;
                }
                write!(fmt, "{{")?;
                write_comma_separated_list(fmt, elements)?;
                write!(fmt, "}}")
            }
            Expr::FuncLit { type_, .. } => write!(fmt, "{} {{ … }}", type_),
            Expr::Paren(x) => write!(fmt, "({})", x),
            Expr::Selector { x, sel } => write!(fmt, "{}.{}", x, sel),
            Expr::Index { x, index } => write!(fmt, "{}[{}]", x, index),
            Expr::IndexList { x, indices, .. } => {
                write!(fmt, "{}[", x)?;
                write_comma_separated_list(fmt, indices)?;
                write!(fmt, "]")
            }
            Expr::Slice { x, low, high, max } => {
                write!(fmt, "{}[", x)?;
                if let Some(low) = low { write!(fmt, "{}", low)?; }
                write!(fmt, ":")?;
                if let Some(high) = high { write!(fmt, "{}", high)?; }
                if let Some(max) = max { write!(fmt, ":{}", max)?; }
                write!(fmt, "]")
            }
            Expr::TypeAssert { x, type_: Some(type_) } => write!(fmt, "{}.({})", x, type_),
            Expr::TypeAssert { x, type_: None } => write!(fmt, "{}.(type)", x),
            Expr::Call { fun, args, ellipsis } => {
                write!(fmt, "{}(", fun)?;
                write_comma_separated_list(fmt, args)?;
                if *ellipsis { write!(fmt, "...")?; }
                write!(fmt, ")")
            }
            Expr::Star(x) => write!(fmt, "*{}", x),
            Expr::Unary { op, x } => write!(fmt, "{}{}", op, x),
            Expr::Binary { x, op, y } => write!(fmt, "{} {} {}", x, op, y),
            Expr::KeyValue { key, value } => write!(fmt, "{}: {}", key, value),
            Expr::Ellipsis(Some(elt)) => write!(fmt, "...{}", elt),
            Expr::Ellipsis(None) => write!(fmt, "..."),
            Expr::ArrayType { len: Some(len), elt } => write!(fmt, "[{}]{}", len, elt),
            Expr::ArrayType { len: None, elt } => write!(fmt, "[]{}", elt),
            Expr::StructType(fields) => write!(fmt, "struct{{{}}}", fields),
            Expr::FuncType(type_) => write!(fmt, "{}", type_),
            Expr::InterfaceType(methods) => write!(fmt, "interface{{{}}}", methods),
            Expr::MapType { key, value } => write!(fmt, "map[{}]{}", key, value),
            Expr::ChanType { dir: ChanDir::Both, value } => write!(fmt, "chan {}", value),
            Expr::ChanType { dir: ChanDir::Send, value } => write!(fmt, "chan<- {}", value),
            Expr::ChanType { dir: ChanDir::Recv, value } => write!(fmt, "<-chan {}", value),
        }
    }
}
