use std::str::FromStr;
use tree_sitter::Node;

use crate::ast::{AssignOp, Block, BranchKind, CaseClause, CommClause, Expr, ForStmt, IfStmt, IncDecOp, RangeStmt, Stmt, SwitchStmt, TypeSwitchStmt};
use crate::error::{RResult, TryCollectMany};
use crate::parser::error::unsupported_syntax;
use crate::parser::{field_children, named_children, Lowering};

impl<'a> Lowering<'a> {
    pub fn lower_block(&self, node: Node) -> RResult<Block> {
        Ok(Block::new(self.lower_statements(named_children(node))?))
    }

    /// Lowers statements, unwrapping any `statement_list` they come in.
    fn lower_statements(&self, nodes: Vec<Node>) -> RResult<Vec<Stmt>> {
        nodes.into_iter()
            .flat_map(|node| match node.kind() {
                "statement_list" => named_children(node),
                _ => vec![node],
            })
            .map(|node| self.lower_statement(node))
            .try_collect_many()
    }

    pub fn lower_statement(&self, node: Node) -> RResult<Stmt> {
        match node.kind() {
            "expression_statement" => Ok(Stmt::Expr(self.lower_first_expr(node)?)),
            "send_statement" => Ok(Stmt::Send {
                chan: self.lower_expr(self.field(node, "channel")?)?,
                value: self.lower_expr(self.field(node, "value")?)?,
            }),
            "inc_statement" => Ok(Stmt::IncDec { x: self.lower_first_expr(node)?, op: IncDecOp::Inc }),
            "dec_statement" => Ok(Stmt::IncDec { x: self.lower_first_expr(node)?, op: IncDecOp::Dec }),
            "assignment_statement" => {
                let operator = self.field(node, "operator")?;
                Ok(Stmt::Assign {
                    lhs: self.lower_expr_list(self.field(node, "left")?)?,
                    op: AssignOp::from_str(self.text(operator)).map_err(|_| unsupported_syntax(operator).to_array())?,
                    rhs: self.lower_expr_list(self.field(node, "right")?)?,
                })
            }
            "short_var_declaration" => Ok(Stmt::Assign {
                lhs: self.lower_expr_list(self.field(node, "left")?)?,
                op: AssignOp::Define,
                rhs: self.lower_expr_list(self.field(node, "right")?)?,
            }),
            "receive_statement" => {
                let right = self.lower_expr(self.field(node, "right")?)?;
                match node.child_by_field_name("left") {
                    None => Ok(Stmt::Expr(right)),
                    Some(left) => Ok(Stmt::Assign {
                        lhs: self.lower_expr_list(left)?,
                        op: match has_child_kind(node, ":=") {
                            true => AssignOp::Define,
                            false => AssignOp::Assign,
                        },
                        rhs: vec![right],
                    }),
                }
            }
            "var_declaration" | "const_declaration" | "type_declaration" => Ok(Stmt::Decl(self.lower_gen_decl(node)?)),
            "labeled_statement" => {
                let label = self.field(node, "label")?;
                let stmt = match named_children(node).into_iter().find(|child| child.id() != label.id()) {
                    Some(stmt) => self.lower_statement(stmt)?,
                    None => Stmt::Empty,
                };
                Ok(Stmt::Labeled { label: self.text(label).to_string(), stmt: Box::new(stmt) })
            }
            "go_statement" => Ok(Stmt::Go(self.lower_first_expr(node)?)),
            "defer_statement" => Ok(Stmt::Defer(self.lower_first_expr(node)?)),
            "return_statement" => Ok(Stmt::Return(match named_children(node).first() {
                Some(results) => self.lower_expr_list(*results)?,
                None => vec![],
            })),
            "break_statement" | "continue_statement" | "goto_statement" | "fallthrough_statement" => {
                let keyword = node.kind().trim_end_matches("_statement");
                Ok(Stmt::Branch {
                    kind: BranchKind::from_str(keyword).map_err(|_| unsupported_syntax(node).to_array())?,
                    label: named_children(node).first().map(|label| self.text(*label).to_string()),
                })
            }
            "block" => Ok(Stmt::Block(self.lower_block(node)?)),
            "if_statement" => Ok(Stmt::If(Box::new(self.lower_if(node)?))),
            "expression_switch_statement" => Ok(Stmt::Switch(Box::new(SwitchStmt {
                init: self.lower_initializer(node)?,
                tag: node.child_by_field_name("value")
                    .map(|value| self.lower_expr(value))
                    .transpose()?,
                body: self.lower_case_clauses(node)?,
            }))),
            "type_switch_statement" => Ok(Stmt::TypeSwitch(Box::new(self.lower_type_switch(node)?))),
            "select_statement" => Ok(Stmt::Select(self.lower_comm_clauses(node)?)),
            "for_statement" => self.lower_for(node),
            "empty_statement" => Ok(Stmt::Empty),
            _ => Err(unsupported_syntax(node).to_array()),
        }
    }

    fn lower_first_expr(&self, node: Node) -> RResult<Expr> {
        match named_children(node).first() {
            Some(expr) => self.lower_expr(*expr),
            None => Err(unsupported_syntax(node).to_array()),
        }
    }

    fn lower_initializer(&self, node: Node) -> RResult<Option<Stmt>> {
        node.child_by_field_name("initializer")
            .map(|init| self.lower_statement(init))
            .transpose()
    }

    fn lower_if(&self, node: Node) -> RResult<IfStmt> {
        Ok(IfStmt {
            init: self.lower_initializer(node)?,
            cond: self.lower_expr(self.field(node, "condition")?)?,
            body: self.lower_block(self.field(node, "consequence")?)?,
            else_: node.child_by_field_name("alternative")
                .map(|alternative| self.lower_statement(alternative))
                .transpose()?,
        })
    }

    /// Statements after the `:` of a case.
    fn lower_case_body(&self, node: Node) -> RResult<Vec<Stmt>> {
        let mut cursor = node.walk();
        let statements = node.children(&mut cursor)
            .skip_while(|child| child.kind() != ":")
            .filter(|child| child.is_named() && child.kind() != "comment")
            .collect::<Vec<_>>();
        self.lower_statements(statements)
    }

    fn lower_case_clauses(&self, node: Node) -> RResult<Vec<CaseClause>> {
        named_children(node).into_iter()
            .filter(|child| child.kind().ends_with("_case"))
            .map(|case| {
                let list = match case.kind() {
                    "expression_case" => Some(self.lower_expr_list(self.field(case, "value")?)?),
                    "type_case" => Some(
                        field_children(case, "type").into_iter()
                            .map(|type_| self.lower_type(type_))
                            .try_collect_many()?
                    ),
                    "default_case" => None,
                    _ => return Err(unsupported_syntax(case).to_array()),
                };
                Ok(CaseClause { list, body: self.lower_case_body(case)? })
            })
            .try_collect_many()
    }

    fn lower_type_switch(&self, node: Node) -> RResult<TypeSwitchStmt> {
        // Older grammars wrap the header in a `type_switch_guard`.
        let guard = named_children(node).into_iter()
            .find(|child| child.kind() == "type_switch_guard")
            .unwrap_or(node);

        let x = Expr::TypeAssert {
            x: Box::new(self.lower_expr(self.field(guard, "value")?)?),
            type_: None,
        };
        let assign = match guard.child_by_field_name("alias") {
            Some(alias) => Stmt::Assign {
                lhs: self.lower_expr_list(alias)?,
                op: AssignOp::Define,
                rhs: vec![x],
            },
            None => Stmt::Expr(x),
        };

        Ok(TypeSwitchStmt {
            init: self.lower_initializer(node)?,
            assign,
            body: self.lower_case_clauses(node)?,
        })
    }

    fn lower_comm_clauses(&self, node: Node) -> RResult<Vec<CommClause>> {
        named_children(node).into_iter()
            .map(|case| match case.kind() {
                "communication_case" => Ok(CommClause {
                    comm: Some(self.lower_statement(self.field(case, "communication")?)?),
                    body: self.lower_case_body(case)?,
                }),
                "default_case" => Ok(CommClause { comm: None, body: self.lower_case_body(case)? }),
                _ => Err(unsupported_syntax(case).to_array()),
            })
            .try_collect_many()
    }

    fn lower_for(&self, node: Node) -> RResult<Stmt> {
        let body_node = self.field(node, "body")?;
        let body = self.lower_block(body_node)?;
        let header = named_children(node).into_iter()
            .find(|child| child.id() != body_node.id());

        match header {
            None => Ok(Stmt::For(Box::new(ForStmt { init: None, cond: None, post: None, body }))),
            Some(clause) if clause.kind() == "for_clause" => Ok(Stmt::For(Box::new(ForStmt {
                init: self.lower_initializer(clause)?,
                cond: clause.child_by_field_name("condition")
                    .map(|cond| self.lower_expr(cond))
                    .transpose()?,
                post: clause.child_by_field_name("update")
                    .map(|post| self.lower_statement(post))
                    .transpose()?,
                body,
            }))),
            Some(clause) if clause.kind() == "range_clause" => {
                let mut left = match clause.child_by_field_name("left") {
                    Some(left) => self.lower_expr_list(left)?.into_iter(),
                    None => vec![].into_iter(),
                };
                Ok(Stmt::Range(Box::new(RangeStmt {
                    key: left.next(),
                    value: left.next(),
                    x: self.lower_expr(self.field(clause, "right")?)?,
                    body,
                })))
            }
            Some(cond) => Ok(Stmt::For(Box::new(ForStmt {
                init: None,
                cond: Some(self.lower_expr(cond)?),
                post: None,
                body,
            }))),
        }
    }
}

fn has_child_kind(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}
