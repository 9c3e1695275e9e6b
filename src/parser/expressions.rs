use std::str::FromStr;
use log::trace;
use tree_sitter::Node;

use crate::ast::{BinaryOp, Expr, LitKind, UnaryOp};
use crate::error::{RResult, TryCollectMany};
use crate::parser::error::{missing_node, unsupported_syntax};
use crate::parser::types::TYPE_KINDS;
use crate::parser::{named_children, Lowering};

impl<'a> Lowering<'a> {
    pub fn lower_expr(&self, node: Node) -> RResult<Expr> {
        trace!("Lowering {}", node.kind());

        match node.kind() {
            "identifier" | "field_identifier" | "package_identifier" | "label_name"
            | "true" | "false" | "nil" | "iota" => Ok(Expr::ident(self.text(node))),
            "int_literal" => Ok(self.literal(node, LitKind::Int)),
            "float_literal" => Ok(self.literal(node, LitKind::Float)),
            "imaginary_literal" => Ok(self.literal(node, LitKind::Imag)),
            "rune_literal" => Ok(self.literal(node, LitKind::Char)),
            "interpreted_string_literal" | "raw_string_literal" => Ok(self.literal(node, LitKind::String)),
            "parenthesized_expression" => Ok(Expr::Paren(Box::new(self.lower_single_expr(node)?))),
            "unary_expression" => {
                let operator = self.field(node, "operator")?;
                let x = Box::new(self.lower_expr(self.field(node, "operand")?)?);
                match self.text(operator) {
                    "*" => Ok(Expr::Star(x)),
                    symbol => Ok(Expr::Unary {
                        op: UnaryOp::from_str(symbol).map_err(|_| unsupported_syntax(operator).to_array())?,
                        x,
                    }),
                }
            }
            "binary_expression" => {
                let operator = self.field(node, "operator")?;
                Ok(Expr::Binary {
                    x: Box::new(self.lower_expr(self.field(node, "left")?)?),
                    op: BinaryOp::from_str(self.text(operator)).map_err(|_| unsupported_syntax(operator).to_array())?,
                    y: Box::new(self.lower_expr(self.field(node, "right")?)?),
                })
            }
            "selector_expression" => Ok(Expr::Selector {
                x: Box::new(self.lower_expr(self.field(node, "operand")?)?),
                sel: self.text(self.field(node, "field")?).to_string(),
            }),
            "index_expression" => Ok(Expr::Index {
                x: Box::new(self.lower_expr(self.field(node, "operand")?)?),
                index: Box::new(self.lower_expr(self.field(node, "index")?)?),
            }),
            "slice_expression" => Ok(Expr::Slice {
                x: Box::new(self.lower_expr(self.field(node, "operand")?)?),
                low: self.lower_optional_expr(node, "start")?,
                high: self.lower_optional_expr(node, "end")?,
                max: self.lower_optional_expr(node, "capacity")?,
            }),
            "type_assertion_expression" => Ok(Expr::TypeAssert {
                x: Box::new(self.lower_expr(self.field(node, "operand")?)?),
                type_: Some(Box::new(self.lower_type(self.field(node, "type")?)?)),
            }),
            // `float64(x)` looks like a call in Go's own tree.
            "type_conversion_expression" => Ok(Expr::Call {
                fun: Box::new(self.lower_type(self.field(node, "type")?)?),
                args: vec![self.lower_expr(self.field(node, "operand")?)?],
                ellipsis: false,
            }),
            "type_instantiation_expression" => {
                let type_ = self.field(node, "type")?;
                let indices = named_children(node).into_iter()
                    .filter(|child| child.id() != type_.id())
                    .map(|child| self.lower_type(child))
                    .try_collect_many()?;
                Ok(Expr::IndexList {
                    x: Box::new(self.lower_type(type_)?),
                    indices,
                    position: type_.end_byte()..node.end_byte(),
                })
            }
            "call_expression" => self.lower_call(node),
            "composite_literal" => Ok(Expr::CompositeLit {
                type_: Some(Box::new(self.lower_type(self.field(node, "type")?)?)),
                elements: self.lower_literal_value(self.field(node, "body")?)?,
            }),
            "literal_value" => Ok(Expr::CompositeLit {
                type_: None,
                elements: self.lower_literal_value(node)?,
            }),
            "literal_element" => self.lower_single_expr(node),
            "keyed_element" => {
                let children = named_children(node);
                let (Some(key), Some(value)) = (children.first(), children.last()) else {
                    return Err(missing_node(node, "key").to_array());
                };
                Ok(Expr::KeyValue {
                    key: Box::new(self.lower_expr(*key)?),
                    value: Box::new(self.lower_expr(*value)?),
                })
            }
            "func_literal" => Ok(Expr::FuncLit {
                type_: Box::new(self.lower_signature(node)?),
                body: self.lower_block(self.field(node, "body")?)?,
            }),
            kind if TYPE_KINDS.contains(&kind) => self.lower_type(node),
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    pub fn lower_expr_list(&self, node: Node) -> RResult<Vec<Expr>> {
        match node.kind() {
            "expression_list" => named_children(node).into_iter()
                .map(|child| self.lower_expr(child))
                .try_collect_many(),
            _ => Ok(vec![self.lower_expr(node)?]),
        }
    }

    fn lower_optional_expr(&self, node: Node, field: &str) -> RResult<Option<Box<Expr>>> {
        node.child_by_field_name(field)
            .map(|child| self.lower_expr(child).map(Box::new))
            .transpose()
    }

    fn lower_single_expr(&self, node: Node) -> RResult<Expr> {
        match named_children(node).as_slice() {
            [single] => self.lower_expr(*single),
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    fn literal(&self, node: Node, kind: LitKind) -> Expr {
        Expr::BasicLit { kind, value: self.text(node).to_string() }
    }

    fn lower_call(&self, node: Node) -> RResult<Expr> {
        let mut fun = self.lower_expr(self.field(node, "function")?)?;
        if let Some(type_arguments) = node.child_by_field_name("type_arguments") {
            fun = Expr::IndexList {
                x: Box::new(fun),
                indices: self.lower_type_arguments(type_arguments)?,
                position: type_arguments.byte_range(),
            };
        }

        let mut ellipsis = false;
        let mut args = vec![];
        for argument in named_children(self.field(node, "arguments")?) {
            match argument.kind() {
                "variadic_argument" => {
                    ellipsis = true;
                    args.push(self.lower_single_expr(argument)?);
                }
                _ => args.push(self.lower_expr(argument)?),
            }
        }

        Ok(Expr::Call { fun: Box::new(fun), args, ellipsis })
    }

    fn lower_literal_value(&self, node: Node) -> RResult<Vec<Expr>> {
        named_children(node).into_iter()
            .map(|element| self.lower_expr(element))
            .try_collect_many()
    }
}
