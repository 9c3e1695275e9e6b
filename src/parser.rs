use std::path::PathBuf;
use itertools::Itertools;
use log::debug;
use tree_sitter::{Node, Parser, Tree};

use crate::ast;
use crate::error::{ErrInFile, RResult, RuntimeError, TryCollectMany};

pub mod error;
mod declarations;
mod expressions;
mod statements;
mod types;

/// Lowers a tree-sitter Go syntax tree into `ast` nodes.
/// Every CST kind outside the supported subset is rejected with its range.
pub struct Lowering<'a> {
    pub source: &'a str,
}

pub fn parse_tree(content: &str) -> RResult<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| RuntimeError::error(&format!("Failed to load the Go grammar: {}", e)).to_array())?;

    parser.parse(content, None)
        .ok_or_else(|| RuntimeError::error("Failed to parse Go source").to_array())
}

pub fn parse_file(content: &str) -> RResult<ast::File> {
    let tree = parse_tree(content)?;
    let root = tree.root_node();

    if let Some(error) = error::find_syntax_error(root) {
        return Err(error.to_array());
    }

    Lowering { source: content }.lower_source_file(root)
}

/// Parses several files belonging to the same package.
pub fn parse_package(sources: &[(PathBuf, String)]) -> RResult<ast::Package> {
    let files: Vec<(PathBuf, ast::File)> = sources.iter()
        .map(|(path, content)| parse_file(content).err_in_file(path).map(|file| (path.clone(), file)))
        .try_collect_many()?;

    let Some((_, first)) = files.first() else {
        return Err(RuntimeError::error("No files to parse").to_array());
    };
    let name = first.name.clone();

    let mismatches = files.iter()
        .filter(|(_, file)| file.name != name)
        .map(|(path, file)| {
            RuntimeError::error(&format!("Found package `{}`, expected `{}`", file.name, name))
                .in_file(path.clone())
        })
        .collect_vec();
    if !mismatches.is_empty() {
        return Err(mismatches);
    }

    debug!("Parsed package {} from {} files", name, files.len());
    Ok(ast::Package { name, files })
}

impl<'a> Lowering<'a> {
    pub fn text(&self, node: Node) -> &'a str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    pub fn field<'t>(&self, node: Node<'t>, name: &str) -> RResult<Node<'t>> {
        node.child_by_field_name(name)
            .ok_or_else(|| error::missing_node(node, name).to_array())
    }

    fn lower_source_file(&self, root: Node) -> RResult<ast::File> {
        let mut name = None;
        let mut decls = vec![];

        for child in named_children(root) {
            match child.kind() {
                "package_clause" => {
                    let identifier = named_children(child).into_iter().next()
                        .ok_or_else(|| error::missing_node(child, "package_identifier").to_array())?;
                    name = Some(self.text(identifier).to_string());
                }
                _ => decls.push(self.lower_top_level(child)?),
            }
        }

        let Some(name) = name else {
            return Err(RuntimeError::error("Missing package clause").in_range(0..0).to_array());
        };

        Ok(ast::File { name, decls })
    }
}

/// Named children of a node, comments excluded.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect_vec();
    children
}

/// Named children under a field. Separators such as `,` carry the field too and are skipped.
pub fn field_children<'t>(node: Node<'t>, name: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.children_by_field_name(name, &mut cursor)
        .filter(|child| child.is_named())
        .collect_vec();
    children
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::ast::*;
    use crate::error::{error_titles, RResult};
    use crate::parser;

    #[test]
    fn package_and_functions() -> RResult<()> {
        let file = parser::parse_file("package main\n\nfunc main() {}\n")?;
        assert_eq!(file.name, "main");
        assert_eq!(file.decls.len(), 1);

        let Decl::Func(function) = &file.decls[0] else {
            panic!();
        };
        assert_eq!(function.name, "main");
        assert!(function.recv.is_none());
        assert_eq!(function.body, Some(Block::default()));

        Ok(())
    }

    #[test]
    fn grouped_parameters_stay_grouped() -> RResult<()> {
        let file = parser::parse_file("package calc\n\nfunc Add(a, b int) int {\n\treturn a + b\n}\n")?;
        let Decl::Func(function) = &file.decls[0] else {
            panic!();
        };

        assert_eq!(function.type_.params.list, vec![Field {
            names: vec!["a".to_string(), "b".to_string()],
            type_: Expr::ident("int"),
            tag: None,
        }]);
        assert_eq!(function.type_.results.as_ref().and_then(|r| r.first_type()), Some(&Expr::ident("int")));

        let statements = &function.body.as_ref().unwrap().statements;
        assert_eq!(statements.len(), 1);
        let Stmt::Return(results) = &statements[0] else {
            panic!();
        };
        assert_eq!(results[0].to_string(), "a + b");

        Ok(())
    }

    #[test]
    fn methods_know_their_receiver() -> RResult<()> {
        let file = parser::parse_file("package shapes\n\nfunc (c *Circle) Area() float64 {\n\treturn c.radius\n}\n")?;
        let Decl::Func(method) = &file.decls[0] else {
            panic!();
        };

        assert_eq!(method.receiver_name(), Some("c"));
        assert_eq!(method.receiver_type_name(), Some("Circle"));

        Ok(())
    }

    #[test]
    fn struct_fields_and_imports() -> RResult<()> {
        let file = parser::parse_file("package shapes\n\nimport \"fmt\"\n\ntype Circle struct {\n\tradius float64 `json:\"r\"`\n\tName\n}\n")?;
        assert_eq!(file.decls.len(), 2);

        let Decl::Gen(GenDecl { token: DeclToken::Import, specs }) = &file.decls[0] else {
            panic!();
        };
        assert_eq!(specs, &vec![Spec::Import(ImportSpec { name: None, path: "\"fmt\"".to_string() })]);

        let Decl::Gen(GenDecl { token: DeclToken::Type, specs }) = &file.decls[1] else {
            panic!();
        };
        let Spec::Type(type_spec) = &specs[0] else {
            panic!();
        };
        let Expr::StructType(fields) = &type_spec.type_ else {
            panic!();
        };
        assert_eq!(fields.list.len(), 2);
        assert_eq!(fields.list[0].names, vec!["radius".to_string()]);
        assert_eq!(fields.list[0].tag.as_deref(), Some("`json:\"r\"`"));
        assert_eq!(fields.list[1], Field::unnamed(Expr::ident("Name")));

        Ok(())
    }

    #[test]
    fn control_flow_statements() -> RResult<()> {
        let file = parser::parse_file("package main

func main() {
\tfor i := 0; i < 3; i++ {
\t\tif i%2 == 0 {
\t\t\tcontinue
\t\t} else if i > 1 {
\t\t\tbreak
\t\t}
\t}
\tfor k, v := range items {
\t\tswitch v {
\t\tcase 1, 2:
\t\t\tfmt.Println(k)
\t\tdefault:
\t\t}
\t}
}
")?;
        let Decl::Func(function) = &file.decls[0] else {
            panic!();
        };
        let statements = &function.body.as_ref().unwrap().statements;
        assert_eq!(statements.len(), 2);

        let Stmt::For(for_) = &statements[0] else {
            panic!();
        };
        assert!(matches!(for_.init, Some(Stmt::Assign { op: AssignOp::Define, .. })));
        assert!(matches!(for_.post, Some(Stmt::IncDec { op: IncDecOp::Inc, .. })));
        let Stmt::If(if_) = &for_.body.statements[0] else {
            panic!();
        };
        assert!(matches!(if_.else_, Some(Stmt::If(_))));

        let Stmt::Range(range) = &statements[1] else {
            panic!();
        };
        assert_eq!(range.key, Some(Expr::ident("k")));
        assert_eq!(range.value, Some(Expr::ident("v")));
        let Stmt::Switch(switch) = &range.body.statements[0] else {
            panic!();
        };
        assert_eq!(switch.body.len(), 2);
        assert_eq!(switch.body[0].list.as_ref().map(Vec::len), Some(2));
        assert!(switch.body[1].list.is_none());

        Ok(())
    }

    #[test]
    fn type_switches_keep_their_guard() -> RResult<()> {
        let file = parser::parse_file("package main

func describe(x any) {
\tswitch v := x.(type) {
\tcase int, string:
\t\tuse(v)
\t}
}
")?;
        let Decl::Func(function) = &file.decls[0] else {
            panic!();
        };
        let Stmt::TypeSwitch(switch) = &function.body.as_ref().unwrap().statements[0] else {
            panic!();
        };
        let Stmt::Assign { lhs, rhs, .. } = &switch.assign else {
            panic!();
        };
        assert_eq!(lhs, &vec![Expr::ident("v")]);
        assert_eq!(rhs[0].to_string(), "x.(type)");
        assert_eq!(switch.body[0].list.as_ref().map(Vec::len), Some(2));

        Ok(())
    }

    #[test]
    fn grouped_value_names_skip_separators() -> RResult<()> {
        let file = parser::parse_file("package p\n\nconst a, b = 1, 2\n\nvar c, d int\n")?;
        let names = file.decls.iter()
            .map(|decl| {
                let Decl::Gen(GenDecl { specs, .. }) = decl else {
                    panic!();
                };
                let Spec::Value(spec) = &specs[0] else {
                    panic!();
                };
                spec.names.clone()
            })
            .collect::<Vec<_>>();

        assert_eq!(names, vec![vec!["a", "b"], vec!["c", "d"]]);
        Ok(())
    }

    #[test]
    fn aliases_are_marked() -> RResult<()> {
        let file = parser::parse_file("package p\n\ntype Celsius = float64\n\ntype Point struct {\n}\n")?;
        let aliases = file.decls.iter()
            .map(|decl| match decl {
                Decl::Gen(GenDecl { specs, .. }) => matches!(&specs[0], Spec::Type(TypeSpec { is_alias: true, .. })),
                Decl::Func(_) => panic!(),
            })
            .collect::<Vec<_>>();

        assert_eq!(aliases, vec![true, false]);
        Ok(())
    }

    #[test]
    fn generics_are_parsed_with_positions() -> RResult<()> {
        let source = "package main\n\nfunc Map[T any](xs []T) {}\n";
        let file = parser::parse_file(source)?;
        let Decl::Func(function) = &file.decls[0] else {
            panic!();
        };
        let type_params = function.type_.type_params.as_ref().unwrap();
        assert_eq!(&source[type_params.position.clone()], "[T any]");

        Ok(())
    }

    #[test]
    fn syntax_errors_have_ranges() {
        let errors = parser::parse_file("package main\n\nfunc main( {\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].range.is_some());
    }

    #[test]
    fn packages_must_agree_on_their_name() {
        let errors = parser::parse_package(&[
            (PathBuf::from("a.go"), "package shapes\n".to_string()),
            (PathBuf::from("b.go"), "package main\n".to_string()),
        ]).unwrap_err();

        assert_eq!(error_titles(&errors), vec!["Found package `main`, expected `shapes`"]);
        assert_eq!(errors[0].path, Some(PathBuf::from("b.go")));
    }
}
