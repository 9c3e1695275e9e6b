use itertools::Itertools;
use tree_sitter::Node;

use crate::ast::{Decl, DeclToken, Field, FieldList, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec};
use crate::error::{RResult, TryCollectMany};
use crate::parser::error::unsupported_syntax;
use crate::parser::{field_children, named_children, Lowering};
use crate::util::position::{positioned, Positioned};

impl<'a> Lowering<'a> {
    pub fn lower_top_level(&self, node: Node) -> RResult<Decl> {
        match node.kind() {
            "function_declaration" | "method_declaration" => {
                Ok(Decl::Func(Box::new(self.lower_func_decl(node)?)))
            }
            "import_declaration" | "const_declaration" | "var_declaration" | "type_declaration" => {
                Ok(Decl::Gen(self.lower_gen_decl(node)?))
            }
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    pub fn lower_gen_decl(&self, node: Node) -> RResult<GenDecl> {
        let token = match node.kind() {
            "import_declaration" => DeclToken::Import,
            "const_declaration" => DeclToken::Const,
            "var_declaration" => DeclToken::Var,
            "type_declaration" => DeclToken::Type,
            _ => return Err(unsupported_syntax(node).to_array()),
        };

        // Parenthesized groups either wrap their specs in a `*_spec_list` or list them directly.
        let spec_nodes = named_children(node).into_iter()
            .flat_map(|child| match child.kind().ends_with("_spec_list") {
                true => named_children(child),
                false => vec![child],
            })
            .collect_vec();

        let specs = spec_nodes.into_iter()
            .map(|spec| self.lower_spec(spec))
            .try_collect_many()?;

        Ok(GenDecl { token, specs })
    }

    fn lower_spec(&self, node: Node) -> RResult<Spec> {
        match node.kind() {
            "import_spec" => Ok(Spec::Import(ImportSpec {
                name: node.child_by_field_name("name").map(|name| self.text(name).to_string()),
                path: self.text(self.field(node, "path")?).to_string(),
            })),
            "var_spec" | "const_spec" => Ok(Spec::Value(ValueSpec {
                names: field_children(node, "name").into_iter()
                    .map(|name| self.text(name).to_string())
                    .collect_vec(),
                type_: node.child_by_field_name("type")
                    .map(|type_| self.lower_type(type_))
                    .transpose()?,
                values: match node.child_by_field_name("value") {
                    Some(values) => self.lower_expr_list(values)?,
                    None => vec![],
                },
            })),
            "type_spec" | "type_alias" => Ok(Spec::Type(TypeSpec {
                name: self.text(self.field(node, "name")?).to_string(),
                type_params: self.lower_type_parameters(node)?,
                is_alias: node.kind() == "type_alias",
                type_: self.lower_type(self.field(node, "type")?)?,
            })),
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    pub fn lower_func_decl(&self, node: Node) -> RResult<FuncDecl> {
        Ok(FuncDecl {
            recv: node.child_by_field_name("receiver")
                .map(|receiver| self.lower_parameters(receiver))
                .transpose()?,
            name: self.text(self.field(node, "name")?).to_string(),
            type_: self.lower_signature(node)?,
            body: node.child_by_field_name("body")
                .map(|body| self.lower_block(body))
                .transpose()?,
        })
    }

    /// The `[T any, U comparable]` list of a generic function or type, if there is one.
    pub fn lower_type_parameters(&self, node: Node) -> RResult<Option<Positioned<FieldList>>> {
        let Some(list) = node.child_by_field_name("type_parameters") else {
            return Ok(None);
        };

        let fields = named_children(list).into_iter()
            .map(|declaration| match declaration.kind() {
                "type_parameter_declaration" | "parameter_declaration" => Ok(Field {
                    names: field_children(declaration, "name").into_iter()
                        .map(|name| self.text(name).to_string())
                        .collect_vec(),
                    type_: self.lower_type(self.field(declaration, "type")?)?,
                    tag: None,
                }),
                _ => Err(unsupported_syntax(declaration).to_array()),
            })
            .try_collect_many()?;

        Ok(Some(positioned(FieldList::new(fields), list.byte_range())))
    }
}
