use std::fmt::{Display, Error, Formatter};

use crate::ast::Expr;
use crate::util::fmt::write_separated_display;
use crate::util::position::Positioned;

/// A struct field, parameter, result, receiver or interface method.
/// Embedded fields and unnamed parameters have no names.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Field {
    pub names: Vec<String>,
    pub type_: Expr,
    pub tag: Option<String>,
}

impl Field {
    pub fn unnamed(type_: Expr) -> Field {
        Field { names: vec![], type_, tag: None }
    }
}

impl Display for Field {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
        if !self.names.is_empty() {
            write!(fmt, "{} ", self.names.join(", "))?;
        }
        write!(fmt, "{}", self.type_)?;
        if let Some(tag) = &self.tag {
            write!(fmt, " {}", tag)?;
        }
        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct FieldList {
    pub list: Vec<Field>,
}

impl FieldList {
    pub fn new(list: Vec<Field>) -> FieldList {
        FieldList { list }
    }

    pub fn first_type(&self) -> Option<&Expr> {
        self.list.first().map(|field| &field.type_)
    }
}

impl Display for FieldList {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
        write_separated_display(fmt, "; ", self.list.iter())
    }
}

/// A function signature. `results` is `None` when the function returns nothing.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct FuncType {
    pub type_params: Option<Positioned<FieldList>>,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

impl Display for FuncType {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
        write!(fmt, "func")?;
        if let Some(type_params) = &self.type_params {
            write!(fmt, "[{}]", type_params)?;
        }
        write!(fmt, "(")?;
        write_separated_display(fmt, ", ", self.params.list.iter())?;
        write!(fmt, ")")?;
        if let Some(results) = &self.results {
            write!(fmt, " (")?;
            write_separated_display(fmt, ", ", results.list.iter())?;
            write!(fmt, ")")?;
        }
        Ok(())
    }
}
