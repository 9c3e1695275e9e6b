use itertools::Itertools;
use tree_sitter::Node;

use crate::ast::{ChanDir, Expr, Field, FieldList, FuncType};
use crate::error::{RResult, TryCollectMany};
use crate::parser::error::unsupported_syntax;
use crate::parser::{field_children, named_children, Lowering};

/// CST kinds that only occur in type position.
pub const TYPE_KINDS: &[&str] = &[
    "type_identifier",
    "qualified_type",
    "pointer_type",
    "slice_type",
    "array_type",
    "implicit_length_array_type",
    "map_type",
    "channel_type",
    "function_type",
    "struct_type",
    "interface_type",
    "generic_type",
    "parenthesized_type",
    "type_elem",
    "type_constraint",
    "negated_type",
];

impl<'a> Lowering<'a> {
    pub fn lower_type(&self, node: Node) -> RResult<Expr> {
        match node.kind() {
            "type_identifier" | "identifier" | "field_identifier" | "package_identifier" => {
                Ok(Expr::ident(self.text(node)))
            }
            "qualified_type" => Ok(Expr::Selector {
                x: Box::new(Expr::ident(self.text(self.field(node, "package")?))),
                sel: self.text(self.field(node, "name")?).to_string(),
            }),
            "pointer_type" => Ok(Expr::Star(Box::new(self.lower_single_type(node)?))),
            "parenthesized_type" => Ok(Expr::Paren(Box::new(self.lower_single_type(node)?))),
            "slice_type" => Ok(Expr::ArrayType {
                len: None,
                elt: Box::new(self.lower_type(self.field(node, "element")?)?),
            }),
            "array_type" => Ok(Expr::ArrayType {
                len: Some(Box::new(self.lower_expr(self.field(node, "length")?)?)),
                elt: Box::new(self.lower_type(self.field(node, "element")?)?),
            }),
            "implicit_length_array_type" => Ok(Expr::ArrayType {
                len: Some(Box::new(Expr::Ellipsis(None))),
                elt: Box::new(self.lower_type(self.field(node, "element")?)?),
            }),
            "map_type" => Ok(Expr::MapType {
                key: Box::new(self.lower_type(self.field(node, "key")?)?),
                value: Box::new(self.lower_type(self.field(node, "value")?)?),
            }),
            "channel_type" => Ok(Expr::ChanType {
                dir: channel_direction(node),
                value: Box::new(self.lower_type(self.field(node, "value")?)?),
            }),
            "function_type" => Ok(Expr::FuncType(Box::new(self.lower_signature(node)?))),
            "struct_type" => Ok(Expr::StructType(self.lower_struct_fields(node)?)),
            "interface_type" => Ok(Expr::InterfaceType(self.lower_interface_elements(node)?)),
            "generic_type" => {
                let arguments = self.field(node, "type_arguments")?;
                Ok(Expr::IndexList {
                    x: Box::new(self.lower_type(self.field(node, "type")?)?),
                    indices: self.lower_type_arguments(arguments)?,
                    position: arguments.byte_range(),
                })
            }
            // Unions (`int | float64`) only make sense as constraints.
            "type_elem" | "type_constraint" => match named_children(node).as_slice() {
                [single] => self.lower_type(*single),
                _ => Err(unsupported_syntax(node).to_array()),
            },
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    fn lower_single_type(&self, node: Node) -> RResult<Expr> {
        match named_children(node).as_slice() {
            [single] => self.lower_type(*single),
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    pub fn lower_type_arguments(&self, node: Node) -> RResult<Vec<Expr>> {
        named_children(node).into_iter()
            .map(|argument| self.lower_type(argument))
            .try_collect_many()
    }

    /// Signature of a function declaration, method, literal, function type or interface method.
    pub fn lower_signature(&self, node: Node) -> RResult<FuncType> {
        let results = match node.child_by_field_name("result") {
            None => None,
            Some(result) if result.kind() == "parameter_list" => Some(self.lower_parameters(result)?),
            Some(result) => Some(FieldList::new(vec![Field::unnamed(self.lower_type(result)?)])),
        };

        Ok(FuncType {
            type_params: self.lower_type_parameters(node)?,
            params: self.lower_parameters(self.field(node, "parameters")?)?,
            results,
        })
    }

    pub fn lower_parameters(&self, node: Node) -> RResult<FieldList> {
        let fields = named_children(node).into_iter()
            .map(|parameter| {
                let names = field_children(parameter, "name").into_iter()
                    .map(|name| self.text(name).to_string())
                    .collect_vec();
                let type_ = self.lower_type(self.field(parameter, "type")?)?;

                match parameter.kind() {
                    "parameter_declaration" => Ok(Field { names, type_, tag: None }),
                    "variadic_parameter_declaration" => Ok(Field {
                        names,
                        type_: Expr::Ellipsis(Some(Box::new(type_))),
                        tag: None,
                    }),
                    _ => Err(unsupported_syntax(parameter).to_array()),
                }
            })
            .try_collect_many()?;

        Ok(FieldList::new(fields))
    }

    fn lower_struct_fields(&self, node: Node) -> RResult<FieldList> {
        let Some(list) = named_children(node).into_iter().find(|child| child.kind() == "field_declaration_list") else {
            return Ok(FieldList::default());
        };

        let fields = named_children(list).into_iter()
            .map(|declaration| {
                if declaration.kind() != "field_declaration" {
                    return Err(unsupported_syntax(declaration).to_array());
                }

                let names = field_children(declaration, "name").into_iter()
                    .map(|name| self.text(name).to_string())
                    .collect_vec();
                let mut type_ = self.lower_type(self.field(declaration, "type")?)?;
                // Embedded `*T` keeps its star outside the type node.
                if names.is_empty() && has_token(declaration, "*") {
                    type_ = Expr::Star(Box::new(type_));
                }

                Ok(Field {
                    names,
                    type_,
                    tag: declaration.child_by_field_name("tag").map(|tag| self.text(tag).to_string()),
                })
            })
            .try_collect_many()?;

        Ok(FieldList::new(fields))
    }

    fn lower_interface_elements(&self, node: Node) -> RResult<FieldList> {
        let fields = named_children(node).into_iter()
            .map(|element| match element.kind() {
                "method_elem" | "method_spec" => Ok(Field {
                    names: vec![self.text(self.field(element, "name")?).to_string()],
                    type_: Expr::FuncType(Box::new(self.lower_signature(element)?)),
                    tag: None,
                }),
                _ => Ok(Field::unnamed(self.lower_type(element)?)),
            })
            .try_collect_many()?;

        Ok(FieldList::new(fields))
    }
}

fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| !child.is_named() && child.kind() == token);
    found
}

fn channel_direction(node: Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens = node.children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect_vec();

    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}
