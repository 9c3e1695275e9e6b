use strum::{Display, EnumIter, EnumString};

/// Binary operators, parsed from and displayed as their Go symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum BinaryOp {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Quo,
    #[strum(to_string = "%")]
    Rem,
    #[strum(to_string = "&")]
    And,
    #[strum(to_string = "|")]
    Or,
    #[strum(to_string = "^")]
    Xor,
    #[strum(to_string = "<<")]
    Shl,
    #[strum(to_string = ">>")]
    Shr,
    #[strum(to_string = "&^")]
    AndNot,
    #[strum(to_string = "&&")]
    LogicalAnd,
    #[strum(to_string = "||")]
    LogicalOr,
    #[strum(to_string = "==")]
    Eql,
    #[strum(to_string = "!=")]
    Neq,
    #[strum(to_string = "<")]
    Lss,
    #[strum(to_string = "<=")]
    Leq,
    #[strum(to_string = ">")]
    Gtr,
    #[strum(to_string = ">=")]
    Geq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum UnaryOp {
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Neg,
    #[strum(to_string = "!")]
    Not,
    #[strum(to_string = "^")]
    Complement,
    #[strum(to_string = "&")]
    AddressOf,
    #[strum(to_string = "<-")]
    Receive,
}

/// Assignment tokens; `:=` and `=` both collapse to plain assignment on emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum AssignOp {
    #[strum(to_string = "=")]
    Assign,
    #[strum(to_string = ":=")]
    Define,
    #[strum(to_string = "+=")]
    AddAssign,
    #[strum(to_string = "-=")]
    SubAssign,
    #[strum(to_string = "*=")]
    MulAssign,
    #[strum(to_string = "/=")]
    QuoAssign,
    #[strum(to_string = "%=")]
    RemAssign,
    #[strum(to_string = "&=")]
    AndAssign,
    #[strum(to_string = "|=")]
    OrAssign,
    #[strum(to_string = "^=")]
    XorAssign,
    #[strum(to_string = "<<=")]
    ShlAssign,
    #[strum(to_string = ">>=")]
    ShrAssign,
    #[strum(to_string = "&^=")]
    AndNotAssign,
}

impl AssignOp {
    pub fn is_plain(&self) -> bool {
        matches!(self, AssignOp::Assign | AssignOp::Define)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum IncDecOp {
    #[strum(to_string = "++")]
    Inc,
    #[strum(to_string = "--")]
    Dec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum BranchKind {
    #[strum(to_string = "break")]
    Break,
    #[strum(to_string = "continue")]
    Continue,
    #[strum(to_string = "goto")]
    Goto,
    #[strum(to_string = "fallthrough")]
    Fallthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum DeclToken {
    #[strum(to_string = "import")]
    Import,
    #[strum(to_string = "const")]
    Const,
    #[strum(to_string = "type")]
    Type,
    #[strum(to_string = "var")]
    Var,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use crate::ast::{AssignOp, BinaryOp, UnaryOp};

    #[test]
    fn operators_parse_their_own_symbols() {
        for op in BinaryOp::iter() {
            assert_eq!(BinaryOp::from_str(&op.to_string()), Ok(op));
        }
        for op in UnaryOp::iter() {
            assert_eq!(UnaryOp::from_str(&op.to_string()), Ok(op));
        }
        for op in AssignOp::iter() {
            assert_eq!(AssignOp::from_str(&op.to_string()), Ok(op));
        }
    }

    #[test]
    fn only_assign_and_define_are_plain() {
        let plain = AssignOp::iter().filter(AssignOp::is_plain).collect::<Vec<_>>();
        assert_eq!(plain, vec![AssignOp::Assign, AssignOp::Define]);
    }
}
