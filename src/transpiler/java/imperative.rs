use itertools::Itertools;
use log::trace;

use crate::ast::{Block, CaseClause, CommClause, ForStmt, IfStmt, RangeStmt, Stmt, ValueSpec};
use crate::transpiler::java::{expressions, transpile_gen_decl, types, EmissionContext};
use crate::transpiler::TranslationError;

/// Every statement is terminated with `;\n`, including compound ones.
pub fn transpile_statements(statements: &[Stmt], context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for statement in statements {
        transpile_statement(statement, context, out)?;
        out.push_str(";\n");
    }

    Ok(())
}

pub fn transpile_statement(statement: &Stmt, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    trace!("Emitting {}", <&'static str>::from(statement));

    match statement {
        Stmt::Decl(decl) => transpile_gen_decl(decl, context, out)?,
        Stmt::Empty => {}
        Stmt::Labeled { label, stmt } => {
            out.push_str(context.symbols.translate(label));
            out.push_str(": ");
            transpile_statement(stmt, context, out)?;
        }
        Stmt::Expr(expr) | Stmt::Go(expr) | Stmt::Defer(expr) => expressions::transpile_expr(expr, context, out)?,
        Stmt::Send { chan, value } => {
            expressions::transpile_expr(chan, context, out)?;
            out.push_str(" <- ");
            expressions::transpile_expr(value, context, out)?;
        }
        Stmt::IncDec { x, op } => {
            expressions::transpile_expr(x, context, out)?;
            out.push_str(&op.to_string());
        }
        Stmt::Assign { lhs, op, rhs } => {
            expressions::transpile_expr_list(lhs, context, out)?;
            match op.is_plain() {
                true => out.push_str(" = "),
                false => out.push_str(&format!(" {} ", op)),
            }
            expressions::transpile_expr_list(rhs, context, out)?;
        }
        Stmt::Return(results) => {
            out.push_str("return");
            if !results.is_empty() {
                out.push(' ');
                expressions::transpile_expr_list(results, context, out)?;
            }
        }
        Stmt::Branch { kind, label } => {
            out.push_str(&kind.to_string());
            if let Some(label) = label {
                out.push(' ');
                out.push_str(context.symbols.translate(label));
            }
        }
        Stmt::Block(block) => transpile_block(block, context, out)?,
        Stmt::If(if_) => transpile_if(if_, context, out)?,
        Stmt::Switch(switch) => {
            out.push_str("switch ");
            transpile_init(&switch.init, context, out)?;
            if let Some(tag) = &switch.tag {
                out.push('(');
                expressions::transpile_expr(tag, context, out)?;
                out.push_str(") ");
            }
            out.push_str("{\n");
            transpile_case_clauses(&switch.body, context, out)?;
            out.push_str("\n}");
        }
        Stmt::TypeSwitch(switch) => {
            out.push_str("switch ");
            transpile_init(&switch.init, context, out)?;
            out.push('(');
            transpile_statement(&switch.assign, context, out)?;
            out.push_str(") {\n");
            transpile_case_clauses(&switch.body, context, out)?;
            out.push_str("\n}");
        }
        Stmt::Select(clauses) => {
            out.push_str("select {\n");
            transpile_comm_clauses(clauses, context, out)?;
            out.push_str("\n}");
        }
        Stmt::For(for_) => transpile_for(for_, context, out)?,
        Stmt::Range(range) => transpile_range(range, context, out)?,
    }

    Ok(())
}

/// `{\n` statements `\n}`, the shape of every Java body.
pub fn transpile_block(block: &Block, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    out.push_str("{\n");
    transpile_statements(&block.statements, context, out)?;
    out.push_str("\n}");
    Ok(())
}

pub fn transpile_value_spec(spec: &ValueSpec, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    if let Some(type_) = &spec.type_ {
        types::transpile_type(type_, context, out)?;
        out.push(' ');
    }
    out.push_str(&spec.names.iter().map(|name| context.symbols.translate(name)).join(", "));
    if !spec.values.is_empty() {
        out.push_str(" = ");
        expressions::transpile_expr_list(&spec.values, context, out)?;
    }

    Ok(())
}

fn transpile_init(init: &Option<Stmt>, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    if let Some(init) = init {
        transpile_statement(init, context, out)?;
        out.push_str("; ");
    }
    Ok(())
}

fn transpile_if(if_: &IfStmt, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    out.push_str("if ");
    transpile_init(&if_.init, context, out)?;
    out.push('(');
    expressions::transpile_expr(&if_.cond, context, out)?;
    out.push_str(") ");
    transpile_block(&if_.body, context, out)?;

    match &if_.else_ {
        None => {}
        Some(Stmt::Block(block)) => {
            out.push_str(" else ");
            transpile_block(block, context, out)?;
        }
        Some(else_if) => {
            out.push_str(" else ");
            transpile_statement(else_if, context, out)?;
        }
    }

    Ok(())
}

fn transpile_case_clauses(clauses: &[CaseClause], context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for clause in clauses {
        match &clause.list {
            Some(list) => {
                out.push_str("case ");
                expressions::transpile_expr_list(list, context, out)?;
                out.push_str(":\n");
            }
            None => out.push_str("default:\n"),
        }
        transpile_statements(&clause.body, context, out)?;
    }

    Ok(())
}

fn transpile_comm_clauses(clauses: &[CommClause], context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for clause in clauses {
        match &clause.comm {
            Some(comm) => {
                out.push_str("case ");
                transpile_statement(comm, context, out)?;
                out.push_str(":\n");
            }
            None => out.push_str("default:\n"),
        }
        transpile_statements(&clause.body, context, out)?;
    }

    Ok(())
}

fn transpile_for(for_: &ForStmt, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    out.push_str("for (");
    if let Some(init) = &for_.init {
        transpile_statement(init, context, out)?;
    }
    out.push_str("; ");
    if let Some(cond) = &for_.cond {
        expressions::transpile_expr(cond, context, out)?;
    }
    out.push_str("; ");
    if let Some(post) = &for_.post {
        transpile_statement(post, context, out)?;
    }
    out.push_str(") ");
    transpile_block(&for_.body, context, out)
}

fn transpile_range(range: &RangeStmt, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    out.push_str("for ");
    if let Some(key) = &range.key {
        expressions::transpile_expr(key, context, out)?;
        if let Some(value) = &range.value {
            out.push_str(", ");
            expressions::transpile_expr(value, context, out)?;
        }
        out.push_str(" := ");
    }
    out.push_str("range ");
    expressions::transpile_expr(&range.x, context, out)?;
    out.push(' ');
    transpile_block(&range.body, context, out)
}
